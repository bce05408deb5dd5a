use serde::{Deserialize, Serialize};

/// Paramètres d'un champ escape-time multibrot (z^n + c).
///
/// La fenêtre du plan complexe est représentée par centre + étendue
/// (center_x/center_y + extent) plutôt que par bornes (xmin/xmax/ymin/ymax).
/// L'étendue est commune aux deux axes : la fenêtre est carrée, comme la
/// grille de pixels.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldParams {
    /// Nombre de pixels par côté (grille resolution × resolution).
    pub resolution: u32,

    /// Centre X du plan complexe.
    pub center_x: f64,
    /// Centre Y du plan complexe.
    pub center_y: f64,
    /// Étendue (largeur = hauteur) de la fenêtre du plan complexe.
    pub extent: f64,

    /// Exposant n de la récurrence z^n + c. Toujours >= 2.
    pub exponent: u32,
    /// Budget d'itérations de la récurrence.
    pub iteration_max: u32,
}

impl FieldParams {
    /// Borne minimale X (calculée à la demande).
    #[inline]
    pub fn xmin(&self) -> f64 {
        self.center_x - self.extent * 0.5
    }

    /// Borne maximale X (calculée à la demande).
    #[inline]
    pub fn xmax(&self) -> f64 {
        self.center_x + self.extent * 0.5
    }

    /// Borne minimale Y (calculée à la demande).
    #[inline]
    pub fn ymin(&self) -> f64 {
        self.center_y - self.extent * 0.5
    }

    /// Borne maximale Y (calculée à la demande).
    #[inline]
    pub fn ymax(&self) -> f64 {
        self.center_y + self.extent * 0.5
    }
}
