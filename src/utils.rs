// SPDX-License-Identifier: GPL-3.0-only

/// Transforms a kebab-case string into a space-separated string where each word starts with an uppercase letter.
pub fn capitalize_string(input: &str) -> String {
    input
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first_char) => first_char.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// PokéAPI reports height in decimetres and weight in hectograms,
/// scales a number down by dividing it by 10
pub fn scale_numbers(num: i64) -> f64 {
    (num as f64) / 10.0
}

/// Number of `size`-long chunks needed to cover `len` items
pub fn chunk_count(len: usize, size: usize) -> usize {
    len.div_ceil(size.max(1))
}
