use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Reporter names: ASCII letters and whitespace only
    /// - Valid: "Nimal Perera", "Anne  Marie"
    /// - Invalid: "O'Brien", "Nimal2", "Nimal-Perera"
    pub static ref NAME_REGEX: Regex = Regex::new(r"^[A-Za-z\s]+$").unwrap();

    /// A complete contact number: exactly ten digits
    pub static ref CONTACT_NO_REGEX: Regex = Regex::new(r"^[0-9]{10}$").unwrap();

    /// Partial contact number accepted while typing (digits only, may be empty)
    pub static ref DIGITS_REGEX: Regex = Regex::new(r"^[0-9]*$").unwrap();
}
