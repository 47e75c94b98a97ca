//! Textual rendering of index lists for the host.

/// Join values as decimal, comma separated, with no surrounding whitespace.
///
/// An empty slice renders as the empty string.
pub fn join_decimal(values: &[u32]) -> String {
    let mut out = String::with_capacity(values.len() * 4);
    for (i, v) in values.iter().enumerate() {
        if i != 0 {
            out.push(',');
        }
        out.push_str(&v.to_string());
    }
    out
}
