/// This type is used to decode percent-encoded characters one character at a
/// time.  Characters which do not belong to a well-formed `%XX` triplet are
/// handed back unchanged.
pub(crate) struct PercentEncodedCharacterDecoder {
    // The `%` and hex digits seen so far of a triplet still in progress.
    pending: Vec<u8>,
    decoded_character: u8,
}

impl PercentEncodedCharacterDecoder {
    /// Start decoding after a `%` has been seen.
    pub(crate) fn new() -> Self {
        Self {
            pending: vec![b'%'],
            decoded_character: 0,
        }
    }

    /// Feed the next byte into the decoder.  Returns `Ok(Some(c))` with the
    /// decoded byte once both hex digits were read, `Ok(None)` while more
    /// digits are needed, and `Err(bytes)` with the raw bytes consumed so far
    /// if `b` is not a hex digit.
    pub(crate) fn next(&mut self, b: u8) -> Result<Option<u8>, Vec<u8>> {
        let digit = match (b as char).to_digit(16) {
            Some(digit) => digit as u8,
            None => {
                let mut raw = std::mem::take(&mut self.pending);
                raw.push(b);
                return Err(raw);
            }
        };
        self.pending.push(b);
        self.decoded_character = (self.decoded_character << 4) | digit;
        if self.pending.len() == 3 {
            self.pending.clear();
            Ok(Some(std::mem::take(&mut self.decoded_character)))
        } else {
            Ok(None)
        }
    }

    /// Return the raw bytes of a triplet cut short by the end of input.
    pub(crate) fn finish(self) -> Vec<u8> {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn good_sequences() {
        let test_vectors: &[(&[u8], u8)] = &[
            (b"41", b'A'),
            (b"5A", b'Z'),
            (b"6e", b'n'),
            (b"e1", 0xe1),
            (b"C8", 0xc8),
            (b"00", 0),
        ];
        for (digits, expected) in test_vectors {
            let mut decoder = PercentEncodedCharacterDecoder::new();
            assert_eq!(Ok(None), decoder.next(digits[0]));
            assert_eq!(Ok(Some(*expected)), decoder.next(digits[1]));
        }
    }

    #[test]
    fn bad_sequences() {
        let mut decoder = PercentEncodedCharacterDecoder::new();
        assert_eq!(Err(b"%G".to_vec()), decoder.next(b'G'));

        let mut decoder = PercentEncodedCharacterDecoder::new();
        assert_eq!(Ok(None), decoder.next(b'4'));
        assert_eq!(Err(b"%4-".to_vec()), decoder.next(b'-'));
    }

    #[test]
    fn cut_short() {
        let mut decoder = PercentEncodedCharacterDecoder::new();
        assert_eq!(Ok(None), decoder.next(b'4'));
        assert_eq!(b"%4".to_vec(), decoder.finish());
    }
}
