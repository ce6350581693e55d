use super::case::{capitalize_first, capitalize_words};
use super::render::Rendered;
use super::segment::WordIndices;
use super::token::Transform;

/// Apply one transform to a rendered value. Text stays attributed to the
/// components it came from.
pub(crate) fn apply(transform: Transform, rendered: Rendered) -> Rendered {
    match transform {
        Transform::Lowercase => rendered.map_text(str::to_lowercase),
        Transform::Uppercase => rendered.map_text(str::to_uppercase),
        Transform::CapitalizeFirst => {
            let mut first = true;
            rendered.map_text(|text| {
                if std::mem::take(&mut first) {
                    capitalize_first(text).into_owned()
                } else {
                    text.to_string()
                }
            })
        }
        Transform::CapitalizeWords => {
            let mut at_word_start = true;
            rendered.map_text(|text| capitalize_words(text, &mut at_word_start))
        }
        Transform::Trim => {
            let plain = rendered.plain();
            let start = plain.len() - plain.trim_start().len();
            let end = plain.trim_end().len().max(start);
            rendered.slice(start..end)
        }
        Transform::Sanitize => {
            let mut rendered = rendered;
            for fragment in rendered.fragments.iter_mut() {
                fragment.escape = true;
            }
            rendered
        }
        Transform::FirstWord => {
            let plain = rendered.plain();
            match WordIndices::new(&plain).next() {
                Some((start, word)) => rendered.slice(start..start + word.len()),
                None => Rendered::default(),
            }
        }
        Transform::LastWord => {
            let plain = rendered.plain();
            match WordIndices::new(&plain).last() {
                Some((start, word)) => rendered.slice(start..start + word.len()),
                None => Rendered::default(),
            }
        }
    }
}
