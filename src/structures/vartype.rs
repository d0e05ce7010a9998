/*!
The domain of the variables of a model.

- [Spin](Vartype::Spin) variables take a value from {-1, +1}.
- [Binary](Vartype::Binary) variables take a value from {0, 1}.

A spin *s* and a binary *x* correspond when *s* = 2*x* - 1.
*/

/// The domain of the variables of a model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Vartype {
    Spin,
    Binary,
}

impl Vartype {
    /// Whether `value` is in the domain.
    pub fn admits(&self, value: i8) -> bool {
        match self {
            Self::Spin => value == -1 || value == 1,
            Self::Binary => value == 0 || value == 1,
        }
    }

    /// The values of the domain, low to high.
    pub fn values(&self) -> [i8; 2] {
        match self {
            Self::Spin => [-1, 1],
            Self::Binary => [0, 1],
        }
    }

    /// The value of the other vartype corresponding to `value`.
    pub fn translate(&self, value: i8) -> i8 {
        match self {
            Self::Spin => (value + 1) / 2,
            Self::Binary => 2 * value - 1,
        }
    }
}

impl std::fmt::Display for Vartype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spin => write!(f, "SPIN"),
            Self::Binary => write!(f, "BINARY"),
        }
    }
}

#[cfg(test)]
mod vartype_tests {
    use super::*;

    #[test]
    fn translation() {
        assert_eq!(Vartype::Spin.translate(-1), 0);
        assert_eq!(Vartype::Spin.translate(1), 1);
        assert_eq!(Vartype::Binary.translate(0), -1);
        assert_eq!(Vartype::Binary.translate(1), 1);
    }

    #[test]
    fn domains() {
        assert!(Vartype::Spin.admits(-1));
        assert!(!Vartype::Spin.admits(0));
        assert!(Vartype::Binary.admits(0));
        assert!(!Vartype::Binary.admits(-1));
    }
}
