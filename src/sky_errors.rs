use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkyError {
    #[error("Invalid interval bounds: low ({low}) must be strictly below high ({high})")]
    InvalidInterval { low: f64, high: f64 },

    #[error("Invalid symmetric interval size: {0} (must be strictly positive)")]
    InvalidIntervalSize(f64),

    #[error("A polynomial needs at least one coefficient")]
    EmptyPolynomial,

    #[error("The leading coefficient of a polynomial cannot be zero")]
    ZeroLeadingCoefficient,

    #[error("Invalid DMS angle: {degrees}° {minutes}' {seconds}\"")]
    InvalidDms {
        degrees: i32,
        minutes: i32,
        seconds: f64,
    },

    #[error("{field} = {value} is outside of its domain {domain}")]
    OutOfDomain {
        field: &'static str,
        value: f64,
        domain: String,
    },

    #[error("{field} must be finite, got {value}")]
    NonFiniteValue { field: &'static str, value: f64 },

    #[error("A celestial object needs a non-empty name")]
    EmptyName,

    #[error("Negative angular size: {0}")]
    NegativeAngularSize(f64),

    #[error("The Earth cannot be observed from itself")]
    EarthNotObservable,

    #[error("An asterism needs at least one star")]
    EmptyAsterism,

    #[error("Asterism references a star absent from the catalogue: HIP {hipparcos_id} ({name})")]
    StarNotInCatalogue { hipparcos_id: u32, name: String },

    #[error("The asterism does not belong to this catalogue")]
    UnknownAsterism,

    #[error("No star with Hipparcos id {0} has been loaded")]
    UnknownHipparcosId(u32),

    #[error("CSV error while loading a catalogue: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unable to perform file operation: {0}")]
    Io(#[from] std::io::Error),
}

impl PartialEq for SkyError {
    fn eq(&self, other: &Self) -> bool {
        use SkyError::*;
        match (self, other) {
            (
                InvalidInterval { low: a, high: b },
                InvalidInterval { low: c, high: d },
            ) => a == c && b == d,
            (InvalidIntervalSize(a), InvalidIntervalSize(b)) => a == b,
            (
                InvalidDms {
                    degrees: d1,
                    minutes: m1,
                    seconds: s1,
                },
                InvalidDms {
                    degrees: d2,
                    minutes: m2,
                    seconds: s2,
                },
            ) => d1 == d2 && m1 == m2 && s1 == s2,
            (
                OutOfDomain {
                    field: f1,
                    value: v1,
                    domain: d1,
                },
                OutOfDomain {
                    field: f2,
                    value: v2,
                    domain: d2,
                },
            ) => f1 == f2 && v1 == v2 && d1 == d2,
            (
                NonFiniteValue { field: f1, .. },
                NonFiniteValue { field: f2, .. },
            ) => f1 == f2,
            (NegativeAngularSize(a), NegativeAngularSize(b)) => a == b,
            (
                StarNotInCatalogue {
                    hipparcos_id: a,
                    name: n1,
                },
                StarNotInCatalogue {
                    hipparcos_id: b,
                    name: n2,
                },
            ) => a == b && n1 == n2,
            (UnknownHipparcosId(a), UnknownHipparcosId(b)) => a == b,

            // Not comparable: equal when the variant matches
            (Csv(_), Csv(_)) => true,
            (Io(_), Io(_)) => true,

            (EmptyPolynomial, EmptyPolynomial) => true,
            (ZeroLeadingCoefficient, ZeroLeadingCoefficient) => true,
            (EmptyName, EmptyName) => true,
            (EarthNotObservable, EarthNotObservable) => true,
            (EmptyAsterism, EmptyAsterism) => true,
            (UnknownAsterism, UnknownAsterism) => true,

            _ => false,
        }
    }
}
