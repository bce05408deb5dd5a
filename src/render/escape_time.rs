use num_complex::Complex64;
use rayon::prelude::*;

use crate::fractal::iterations::iterate_cell;
use crate::fractal::FieldParams;

/// Échantillonne `n` valeurs également espacées sur [min, max], bornes
/// incluses. Le dernier échantillon vaut exactement `max` (pas d'erreur
/// d'arrondi cumulée). Pour n = 1, retourne [min].
pub fn axis_samples(min: f64, max: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![min];
    }
    let step = (max - min) / (n - 1) as f64;
    (0..n)
        .map(|i| if i == n - 1 { max } else { min + step * i as f64 })
        .collect()
}

/// Calcule le champ escape-time complet pour les paramètres donnés.
///
/// Retourne un vecteur de taille resolution × resolution, ordre ligne par
/// ligne : l'indice de ligne suit l'axe imaginaire, l'indice de colonne
/// l'axe réel. La constante c de la cellule (ligne j, colonne i) vaut
/// `real[i] + i·imag[j]`, c fixé pour toute la passe.
///
/// Le calcul est parallélisé par lignes avec rayon : les cellules sont
/// indépendantes entre elles, seule la suite d'itérations d'une même
/// cellule est séquentielle. Le résultat est identique quel que soit
/// l'ordonnancement des threads.
pub fn render_escape_field(params: &FieldParams) -> Vec<u32> {
    let n = params.resolution as usize;
    let mut field = vec![0u32; n * n];

    if n == 0 {
        return field;
    }

    let real_samples = axis_samples(params.xmin(), params.xmax(), n);
    let imag_samples = axis_samples(params.ymin(), params.ymax(), n);

    field
        .par_chunks_mut(n)
        .enumerate()
        .for_each(|(j, row)| {
            let im = imag_samples[j];
            for (i, cell) in row.iter_mut().enumerate() {
                let c = Complex64::new(real_samples[i], im);
                *cell = iterate_cell(params, c);
            }
        });

    field
}
