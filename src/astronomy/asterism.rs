use std::sync::Arc;

use itertools::Itertools;

use crate::astronomy::star::Star;
use crate::sky_errors::SkyError;

/// An ordered group of stars drawn as a polyline, each star linked to the next.
#[derive(Debug, Clone)]
pub struct Asterism {
    stars: Vec<Arc<Star>>,
}

impl Asterism {
    /// Return
    /// ------
    /// * [`SkyError::EmptyAsterism`] when `stars` is empty.
    pub fn new(stars: Vec<Arc<Star>>) -> Result<Self, SkyError> {
        if stars.is_empty() {
            return Err(SkyError::EmptyAsterism);
        }
        Ok(Self { stars })
    }

    pub fn stars(&self) -> &[Arc<Star>] {
        &self.stars
    }

    /// Consecutive pairs of stars, one per line segment of the asterism.
    pub fn segments(&self) -> impl Iterator<Item = (&Arc<Star>, &Arc<Star>)> + '_ {
        self.stars.iter().tuple_windows()
    }
}
