use super::percent_encoded_character_decoder::PercentEncodedCharacterDecoder;

/// Decode every `%XX` triplet of the given element into the byte it encodes.
///
/// A `%` which is not followed by two hex digits is kept as is, together with
/// whatever followed it.  Decoded bytes which do not form valid UTF-8 are
/// replaced by U+FFFD.
///
/// # Examples
///
/// ```rust
/// use httpuri::decode_percent;
///
/// assert_eq!("a b", decode_percent("a%20b"));
/// assert_eq!("100%", decode_percent("100%"));
/// ```
#[must_use]
pub fn decode_percent<T>(element: T) -> String
where
    T: AsRef<str>,
{
    let element = element.as_ref();
    if !element.contains('%') {
        return element.to_string();
    }

    let mut decoded = Vec::with_capacity(element.len());
    let mut decoder: Option<PercentEncodedCharacterDecoder> = None;
    for b in element.bytes() {
        match decoder.as_mut() {
            Some(pec_decoder) => match pec_decoder.next(b) {
                Ok(Some(c)) => {
                    decoded.push(c);
                    decoder = None;
                }
                Ok(None) => (),
                Err(mut raw) if b == b'%' => {
                    // The `%` which broke the triplet may start a new one.
                    raw.pop();
                    decoded.extend(raw);
                    decoder = Some(PercentEncodedCharacterDecoder::new());
                }
                Err(raw) => {
                    decoded.extend(raw);
                    decoder = None;
                }
            },
            None if b == b'%' => decoder = Some(PercentEncodedCharacterDecoder::new()),
            None => decoded.push(b),
        }
    }
    if let Some(pec_decoder) = decoder {
        decoded.extend(pec_decoder.finish());
    }
    String::from_utf8_lossy(&decoded).into_owned()
}
