use std::cmp::Ordering;

#[cfg(feature = "format")]
use std::fmt::{Display, Formatter};
#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::vercmp::vercmp;

/// A plain version string ordered by `vercmp()`. Any text is a valid
/// version, so conversions from strings never fail.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Version(pub String);

impl Version {
    pub fn new<S: Into<String>>(version: S) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Version {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<String> for Version {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        vercmp(&self.0, &other.0)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Equality follows the comparison rules, not the spelling, so `1.0`,
/// `1_0` and `1.00` are all the same version
impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

#[cfg(feature = "format")]
impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The full ordered identity of a package version: epoch, version,
/// release, and the distribution epoch some distributions append after
/// a second colon
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Evr {
    /// Overrides any version comparison when set, a missing epoch
    /// counts as 0
    pub epoch: u32,
    pub version: Version,
    /// The package build iteration for a given upstream version, empty
    /// if the version string carried none
    pub release: Version,
    /// Compared last, absence compares as the empty string
    pub distepoch: Option<Version>,
}

impl TryFrom<&str> for Evr {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        let (epoch, remaining) = match value.split_once(':') {
            Some((epoch, remaining)) => {
                // the epoch must be a plain run of decimal digits
                if epoch.is_empty() ||
                    ! epoch.bytes().all(|byte| byte.is_ascii_digit())
                {
                    log::error!("Bad epoch '{}' in version string '{}'",
                        epoch, value);
                    return Err(Error::InvalidEpoch(value.into()))
                }
                match epoch.parse() {
                    Ok(epoch) => (epoch, remaining),
                    Err(_) => {
                        log::error!("Epoch '{}' in version string '{}' \
                            does not fit an epoch number", epoch, value);
                        return Err(Error::InvalidEpoch(value.into()))
                    },
                }
            },
            None => (0, value),
        };
        let (remaining, distepoch) = match remaining.split_once(':') {
            Some((remaining, distepoch)) =>
                (remaining, Some(distepoch.into())),
            None => (remaining, None),
        };
        let (version, release) = match remaining.rsplit_once('-') {
            Some((version, release)) =>
                (version.into(), release.into()),
            None => (remaining.into(), Default::default()),
        };
        Ok(Self { epoch, version, release, distepoch })
    }
}

impl TryFrom<&[u8]> for Evr {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::try_from(String::from_utf8_lossy(value).as_ref())
    }
}

impl Evr {
    fn distepoch_str(&self) -> &str {
        match &self.distepoch {
            Some(distepoch) => distepoch.as_str(),
            None => "",
        }
    }
}

impl Ord for Evr {
    fn cmp(&self, other: &Self) -> Ordering {
        let order = self.epoch.cmp(&other.epoch);
        if order != Ordering::Equal {
            return order
        }
        let order = self.version.cmp(&other.version);
        if order != Ordering::Equal {
            return order
        }
        let order = self.release.cmp(&other.release);
        if order != Ordering::Equal {
            return order
        }
        vercmp(self.distepoch_str(), other.distepoch_str())
    }
}

impl PartialOrd for Evr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evr {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Evr {}

#[cfg(feature = "format")]
impl Display for Evr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // a distepoch needs the epoch in front, otherwise the string
        // would not parse back unambiguously
        if self.epoch != 0 || self.distepoch.is_some() {
            write!(f, "{}:", self.epoch)?;
        }
        write!(f, "{}", self.version)?;
        if ! self.release.as_str().is_empty() {
            write!(f, "-{}", self.release)?
        }
        if let Some(distepoch) = &self.distepoch {
            write!(f, ":{}", distepoch)?
        }
        Ok(())
    }
}
