use num_complex::Complex64;

use crate::fractal::FieldParams;

/// Calcule la valeur escape-time pour un point donné du plan complexe.
///
/// Récurrence : z_{n+1} = z_n^exposant + c, z_0 = 0. La cellule retient
/// l'indice de la dernière itération où z était encore fini. Il n'y a pas
/// de rayon de bailout : la divergence est détectée par le débordement du
/// f64 vers Inf/NaN, qui est un comportement attendu de l'arithmétique
/// IEEE-754 et ne lève jamais d'erreur.
///
/// Conséquences :
/// - un point qui ne diverge jamais retourne `iteration_max - 1` ;
/// - un point divergent retourne l'indice de la dernière itération finie,
///   pas celui où la divergence est constatée.
pub fn iterate_cell(params: &FieldParams, c: Complex64) -> u32 {
    let mut z = Complex64::new(0.0, 0.0);
    let mut color = 0u32;
    for i in 0..params.iteration_max {
        z = z.powu(params.exponent) + c;
        if z.re.is_finite() && z.im.is_finite() {
            color = i;
        } else {
            // Une fois Inf/NaN, z ne redevient jamais fini : inutile de
            // poursuivre, color est gelé.
            break;
        }
    }
    color
}
