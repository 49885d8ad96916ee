use crate::error::GreensFunctionError;
use ::config::{Config, File};
use keldysh_contour::TimeGrid;
use serde::Deserialize;
use std::path::Path;

/// Top-level configuration for a contour calculation
#[derive(Debug, Deserialize)]
pub struct Configuration {
    /// Discretisation of the time contour
    pub contour: ContourConfiguration,
}

/// Discretisation of the three-branch Kadanoff-Baym contour
#[derive(Debug, Deserialize)]
pub struct ContourConfiguration {
    /// Extent of the real-time branches
    pub maximum_time: f64,
    /// Number of points on each real-time branch
    pub real_time_points: usize,
    /// Inverse temperature, the extent of the imaginary branch
    pub inverse_temperature: f64,
    /// Number of points on the imaginary branch
    pub imaginary_time_points: usize,
}

impl Configuration {
    /// Build the configuration from the TOML file at `path`
    pub fn build(path: &Path) -> Result<Self, GreensFunctionError> {
        let settings = Config::builder().add_source(File::from(path)).build()?;
        Ok(settings.try_deserialize()?)
    }
}

impl ContourConfiguration {
    /// Construct the contour grid the configuration describes
    pub fn build_grid(&self) -> TimeGrid {
        TimeGrid::new(
            self.maximum_time,
            self.real_time_points,
            self.inverse_temperature,
            self.imaginary_time_points,
        )
    }
}

#[cfg(test)]
mod test {
    use super::Configuration;
    use keldysh_contour::Branch;
    use std::path::PathBuf;

    #[test]
    fn the_default_configuration_builds_a_contour() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(".config/default.toml");
        let configuration = Configuration::build(&path).unwrap();
        let grid = configuration.contour.build_grid();
        assert_eq!(
            grid.branch_len(Branch::Forward),
            configuration.contour.real_time_points
        );
        assert_eq!(
            grid.branch_len(Branch::Imaginary),
            configuration.contour.imaginary_time_points
        );
    }
}
