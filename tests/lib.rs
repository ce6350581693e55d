use name_format::{compile, initials, split, Key, Markup, NameRecord, Pattern, PatternCache, Settings};
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;

fn data_lines(path: &str) -> Vec<String> {
    let f = File::open(path).ok().unwrap();
    let reader = BufReader::new(f);
    reader
        .lines()
        .map(|l| l.ok().unwrap())
        .filter(|l| !l.starts_with('#') && l.contains('\t'))
        .collect()
}

fn parse_record(input: &str) -> NameRecord {
    NameRecord::from_pairs(
        input
            .split(';')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap()),
    )
    .unwrap()
}

fn john() -> NameRecord {
    NameRecord::new().with(Key::Given, "John")
}

fn records() -> Vec<NameRecord> {
    vec![
        NameRecord::new(),
        john(),
        NameRecord::new().with(Key::Family, "Tolkien"),
        NameRecord::new()
            .with(Key::Title, "Prof.")
            .with(Key::Given, "john ronald")
            .with(Key::Middle, "Reuel")
            .with(Key::Family, "TOLKIEN")
            .with(Key::Credentials, "CBE")
            .with(Key::Preferred, "Tollers"),
        NameRecord::new()
            .with(Key::Given, "  ")
            .with(Key::Alternative, "Ἀριστοτέλης"),
    ]
}

#[test]
fn patterns() {
    for line in data_lines("tests/patterns.txt") {
        let parts: Vec<&str> = line.split('\t').collect();
        let pattern = parts[0];
        let record = parse_record(parts[1]);
        let expected = parts[2];
        let markup: Markup = parts.get(3).map(|m| m.parse().unwrap()).unwrap_or_default();

        let settings = Settings::default().with_markup(markup);
        let rendered = compile(pattern).render(&record, &settings);
        assert!(
            rendered == expected,
            "[{}] with {:?}: expected {:?}, got {:?}",
            pattern,
            parts[1],
            expected,
            rendered
        );
    }
}

#[test]
fn words() {
    for line in data_lines("tests/words.txt") {
        let parts: Vec<&str> = line.split('\t').collect();
        let text = parts[0];
        let count: usize = parts[1].parse().unwrap();
        let expected_initials = parts[2];

        let words: Vec<&str> = split(text).collect();
        assert!(
            words.len() == count,
            "[{}] expected {} words, got {:?}",
            text,
            count,
            words
        );

        let initials = initials(text);
        assert_eq!(expected_initials, initials, "[{}]", text);
        assert_eq!(count, initials.chars().count(), "[{}]", text);
    }
}

#[test]
fn scenarios() {
    let settings = Settings::default();
    assert_eq!(" ", settings.sep1.as_str());
    assert_eq!(", ", settings.sep2.as_str());
    assert_eq!("", settings.sep3.as_str());

    assert_eq!("John ", compile("g f").render(&john(), &settings));
    assert_eq!("John ", compile("gif").render(&john(), &settings));
    assert_eq!("John, ", compile("gjf").render(&john(), &settings));
    assert_eq!("John", compile("gkf").render(&john(), &settings));
    assert_eq!("John)(", compile("(g))()(").render(&john(), &settings));

    let record = NameRecord::new()
        .with(Key::Given, "JoHn")
        .with(Key::Middle, "pEter")
        .with(Key::Family, "dOE");
    assert_eq!("JD", compile("I").render(&record, &settings));
}

#[test]
fn compilation_is_idempotent() {
    let settings = Settings::default();
    for pattern in ["((((t+ig)+im)+if)+is)+jc", "q|(x.)+iUf", "(g))()(", "=jc^-f", "LFg+iBb(m)"] {
        let a = compile(pattern);
        let b = compile(pattern);
        assert_eq!(a, b);
        for record in records() {
            assert_eq!(a.render(&record, &settings), b.render(&record, &settings));
        }
    }
}

#[test]
fn fallback_law() {
    let settings = Settings::default();
    let pairs = [("g", "f"), ("q", "a"), ("(t+ig)", "Uf"), ("a", "A"), ("x", "(k)")];
    for record in records() {
        for (a, b) in pairs {
            let left = compile(a).render(&record, &settings);
            let right = compile(b).render(&record, &settings);
            let expected = if left.trim().is_empty() { right } else { left };
            assert_eq!(expected, compile(&format!("{}|{}", a, b)).render(&record, &settings));
        }
    }
}

#[test]
fn conditional_inverse_law() {
    let settings = Settings::default();
    for record in records() {
        for unit in ["g", "m", "a", "(t+ig)"] {
            let with = compile(&format!("=~{}", unit)).render(&record, &settings);
            let without = compile(&format!("^~{}", unit)).render(&record, &settings);
            assert!(
                with.starts_with('~') != without.starts_with('~'),
                "[{}] {:?} / {:?}",
                unit,
                with,
                without
            );
        }
    }
}

#[test]
fn modifier_pipeline_composition() {
    let settings = Settings::default();
    for given in ["mARY", "émile", "", "o'neil", "ǆemal"] {
        let record = NameRecord::new().with(Key::Given, given);
        let lowered = compile("Lg").render(&record, &settings);
        let capitalized = compile("F(Lg)").render(&record, &settings);
        assert_eq!(capitalized, compile("LFg").render(&record, &settings));
        assert_eq!(compile("Fg").render(&NameRecord::new().with(Key::Given, lowered.as_str()), &settings), capitalized);
    }
}

#[test]
fn shared_across_threads() {
    let pattern = compile("t+ig+iUf");
    let cache = PatternCache::new();
    let settings = Settings::default().with_markup(Markup::Wrapped);
    let records = records();

    crossbeam_utils::thread::scope(|s| {
        for record in &records {
            let pattern = &pattern;
            let cache = &cache;
            let settings = &settings;
            s.spawn(move |_| {
                let expected = pattern.render(record, settings);
                for _ in 0..50 {
                    assert_eq!(expected, cache.get(pattern.source()).render(record, settings));
                }
            });
        }
    })
    .unwrap();

    assert_eq!(1, cache.len());
}

#[test]
fn long_conditional_chains() {
    let record = NameRecord::new().with(Key::Given, "A");
    let settings = Settings::default();

    for link in ["+ig", "+ig|f", "=i(g|f)"] {
        let links = 10_000;
        let pattern = format!("g{}", link.repeat(links));
        let rendered = compile(&pattern).render(&record, &settings);
        assert!(rendered.starts_with("A A A"), "[{}] {:?}", link, &rendered[..20]);
        assert_eq!(links + 1, rendered.matches('A').count(), "[{}]", link);
    }
}

#[test]
fn invalid_utf8() {
    assert!(Pattern::from_utf8(b"g+i\xff").is_err());
    assert_eq!(compile("g+if"), Pattern::from_utf8(b"g+if").unwrap());
}
