use crate::types::err::{self};

/// A configurable value, together with its bounds.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, if the value is within bounds.
    pub fn set(&mut self, value: T) -> Result<(), err::ConfigError> {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                Ok(())
            }
            false => Err(err::ConfigError::OutOfRange(self.name)),
        }
    }
}

#[cfg(test)]
mod config_option_tests {
    use super::*;

    #[test]
    fn bounds() {
        let mut option = ConfigOption {
            name: "reads",
            min: 1,
            max: 10,
            value: 5,
        };

        assert_eq!(option.set(10), Ok(()));
        assert_eq!(option.value, 10);
        assert_eq!(option.set(0), Err(err::ConfigError::OutOfRange("reads")));
        assert_eq!(option.value, 10);
        assert_eq!(option.min_max(), (1, 10));
    }

    #[test]
    fn nan_is_out_of_range() {
        let mut option = ConfigOption {
            name: "strength",
            min: 0.0,
            max: f64::MAX,
            value: 3.0,
        };
        assert!(option.set(f64::NAN).is_err());
    }
}
