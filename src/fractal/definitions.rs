use crate::fractal::FieldParams;

/// Budget d'itérations de la récurrence.
pub const DEFAULT_ITERATION_MAX: u32 = 150;
/// Étendue de la fenêtre du plan complexe (carrée).
pub const DEFAULT_EXTENT: f64 = 3.0;
/// Nombre de pixels par côté de la grille.
pub const DEFAULT_RESOLUTION: u32 = 1000;

/// Centre de la fenêtre privilégié pour chaque exposant.
///
/// Le cadrage intéressant du multibrot dépend de l'exposant : pour n = 2
/// l'ensemble est décalé vers la gauche, pour n = 4 légèrement. Les
/// exposants non listés utilisent l'origine.
pub fn center_for_exponent(exponent: u32) -> (f64, f64) {
    match exponent {
        2 => (-0.75, 0.0),
        3 => (0.0, 0.0),
        4 => (-0.2, 0.0),
        _ => (0.0, 0.0),
    }
}

/// Construit les paramètres par défaut pour un exposant donné.
pub fn default_params_for_exponent(exponent: u32) -> FieldParams {
    let (center_x, center_y) = center_for_exponent(exponent);
    FieldParams {
        resolution: DEFAULT_RESOLUTION,
        center_x,
        center_y,
        extent: DEFAULT_EXTENT,
        exponent,
        iteration_max: DEFAULT_ITERATION_MAX,
    }
}

/// Résout l'exposant effectif depuis l'argument de ligne de commande.
///
/// Argument absent, non entier ou < 2 : repli silencieux sur 2.
pub fn exponent_from_arg(arg: Option<&str>) -> u32 {
    arg.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|&exponent| exponent >= 2)
        .unwrap_or(2)
}
