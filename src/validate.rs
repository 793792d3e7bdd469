//! IP address input validation.

/// Checks whether a string is a syntactically valid IPv4 dotted-quad address.
///
/// Accepts exactly four dot-separated decimal octets, each in `[0, 255]`,
/// with no surrounding whitespace, no extra characters, and no leading zeros
/// beyond a single `"0"`. Rejects IPv6 literals, hostnames, and partial
/// addresses.
///
/// This predicate is applied both for live input feedback and as a hard
/// precondition before a lookup is issued for a manually entered address.
///
/// # Arguments
///
/// * `candidate` - The string to check
///
/// # Returns
///
/// `true` if `candidate` is a well-formed IPv4 address, `false` otherwise.
pub fn is_valid_ipv4(candidate: &str) -> bool {
    let mut octets = 0usize;
    for part in candidate.split('.') {
        octets += 1;
        if octets > 4 {
            return false;
        }
        if part.is_empty() || part.len() > 3 {
            return false;
        }
        if !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        // Plain decimal only: no leading zeros beyond a single "0"
        if part.len() > 1 && part.starts_with('0') {
            return false;
        }
        match part.parse::<u16>() {
            Ok(value) if value <= 255 => {}
            _ => return false,
        }
    }
    octets == 4
}
