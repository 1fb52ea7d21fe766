/// Integer displayed with thousands separated by `'`.
pub struct NiceInt(u128);

impl NiceInt {
    pub fn from(value: impl Into<u128>) -> Self {
        Self(value.into())
    }

    pub fn from_usize(value: usize) -> Self {
        Self(value as u128)
    }
}

impl std::fmt::Display for NiceInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", with_delimiters(self.0))
    }
}

fn with_delimiters(value: u128) -> String {
    value
        .to_string()
        .chars()
        .rev()
        .collect::<Vec<char>>()
        .chunks(3)
        .map(|c| c.iter().rev().collect::<String>())
        .rev()
        .collect::<Vec<String>>()
        .join("'")
}
