/// Determine whether the given string is a dotted-quad address: four groups of
/// decimal digits separated by `.`.
///
/// Each group may be one digit, two digits, `1` followed by two digits, `2`
/// followed by `0`-`4` and a digit, or `25` followed by a final digit.  With
/// `strict_octets` the final digit after `25` is limited to `0`-`5`; without
/// it, `0`-`6` is allowed, which means the group `256` is accepted.
#[must_use]
pub fn is_ipv4_address<T>(address: T, strict_octets: bool) -> bool
where
    T: AsRef<str>,
{
    let mut num_groups = 0;
    for group in address.as_ref().split('.') {
        num_groups += 1;
        if num_groups > 4 || !is_octet(group.as_bytes(), strict_octets) {
            return false;
        }
    }
    num_groups == 4
}

fn is_octet(group: &[u8], strict_octets: bool) -> bool {
    let last_after_25 = if strict_octets { b'5' } else { b'6' };
    match *group {
        [d] => d.is_ascii_digit(),
        [d1, d2] => d1.is_ascii_digit() && d2.is_ascii_digit(),
        [b'1', d1, d2] => d1.is_ascii_digit() && d2.is_ascii_digit(),
        [b'2', b'5', d] => (b'0'..=last_after_25).contains(&d),
        [b'2', d1, d2] => (b'0'..=b'4').contains(&d1) && d2.is_ascii_digit(),
        _ => false,
    }
}
