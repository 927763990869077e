#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Coulomb's constant for the inverse-square law.
    pub coulomb_k: f32,
    /// World-space radius of a charge disc, also used for hit testing.
    pub charge_radius: f32,
    /// Display length a net-force arrow is scaled to.
    pub force_arrow_length: f32,
    /// Display length a field-grid arrow is scaled to.
    pub field_arrow_length: f32,
    /// Size of the triangular arrowhead.
    pub arrow_head_size: f32,
    /// Spacing of the field sampling grid.
    pub grid_step: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            coulomb_k: 8.99e9,
            charge_radius: 15.0,
            force_arrow_length: 100.0,
            field_arrow_length: 20.0,
            arrow_head_size: 10.0,
            grid_step: 20.0,
        }
    }
}
