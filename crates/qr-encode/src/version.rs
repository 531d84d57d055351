/// A number between 1 and 40 (inclusive).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Version(u8);

impl Version {
    /// The minimum version number supported in the QR Code Model 2 standard.
    pub const MIN: Version = Version(1);

    /// The maximum version number supported in the QR Code Model 2 standard.
    pub const MAX: Version = Version(40);

    /// Creates a version object from the given number.
    ///
    /// Panics if the number is outside the range [1, 40].
    pub fn new(ver: u8) -> Self {
        assert!(
            (Version::MIN.value()..=Version::MAX.value()).contains(&ver),
            "Version number out of range"
        );
        Self(ver)
    }

    /// Returns the value, which is in the range [1, 40].
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the side length of the square symbol at this version, in modules.
    /// `D = 17 + 4 * version`, so this is in the range [21, 177].
    pub fn dimension(self) -> i32 {
        17 + 4 * i32::from(self.0)
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn compute_dimension_from_version() {
        assert_eq!(Version::new(1).dimension(), 21);
        assert_eq!(Version::new(40).dimension(), 177);
    }

    #[test]
    #[should_panic]
    fn reject_version_zero() {
        Version::new(0);
    }

    #[test]
    #[should_panic]
    fn reject_version_above_max() {
        Version::new(41);
    }
}
