use rand::Rng;

// The fixed alphabet every generated string draws from.
pub const DIGITS: &[u8] = b"0123456789";

// An ordered collection of equal-length strings, stored as one flat byte
// buffer walked with a stride. No terminator byte exists anywhere in the
// buffer: a string is exactly `string_len` usable symbols, addressed by
// index arithmetic alone. Immutable once built.
pub struct StringSet {
    data: Vec<u8>,
    count: usize,
    string_len: usize,
}

impl StringSet {
    // Generate `count` strings of `string_len` characters, each character
    // sampled independently and uniformly from the digit alphabet.
    pub fn random(count: usize, string_len: usize, rng: &mut impl Rng) -> Self {
        let mut data = Vec::with_capacity(count * string_len);
        data.resize_with(count * string_len, || {
            DIGITS[rng.gen_range(0..DIGITS.len())]
        });
        StringSet {
            data,
            count,
            string_len,
        }
    }

    // Build a set from explicit strings, for callers that already know the
    // data they want compared.
    pub fn from_strs(strings: &[&str]) -> Self {
        let string_len = strings.first().map_or(0, |string| string.len());
        let mut data = Vec::with_capacity(strings.len() * string_len);
        for string in strings {
            assert_eq!(
                string.len(),
                string_len,
                "All strings must share one length"
            );
            data.extend_from_slice(string.as_bytes());
        }
        StringSet {
            data,
            count: strings.len(),
            string_len,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn string_len(&self) -> usize {
        self.string_len
    }

    pub fn get(&self, index: usize) -> &[u8] {
        &self.data[index * self.string_len..(index + 1) * self.string_len]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks(self.string_len)
    }
}
