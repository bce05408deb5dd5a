use std::path::Path;

use image::{ImageError, RgbImage};
use rayon::prelude::*;

use crate::color::color_for_value;
use crate::fractal::FieldParams;

/// Génère une image RGB colorisée à partir du champ escape-time, puis
/// l'enregistre au format PNG. Un fichier existant du même nom est écrasé.
///
/// La colorisation est également parallélisée par lignes.
pub fn save_png(params: &FieldParams, field: &[u32], output: &Path) -> Result<(), ImageError> {
    let n = params.resolution;
    let side = n as usize;

    assert_eq!(field.len(), side * side, "Taille du champ escape-time invalide");

    let buffer: Vec<u8> = (0..side)
        .into_par_iter()
        .flat_map(|y| {
            (0..side)
                .flat_map(|x| {
                    let (r, g, b) = color_for_value(field[y * side + x], params.iteration_max);
                    vec![r, g, b]
                })
                .collect::<Vec<u8>>()
        })
        .collect();

    let img = RgbImage::from_raw(n, n, buffer).ok_or_else(|| {
        ImageError::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "Impossible de créer l'image depuis le buffer",
        ))
    })?;

    // Avec image 0.25, save() détecte automatiquement le format depuis
    // l'extension.
    img.save(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_escape_field;

    #[test]
    fn test_save_png_writes_file() {
        let params = FieldParams {
            resolution: 8,
            center_x: -0.75,
            center_y: 0.0,
            extent: 3.0,
            exponent: 2,
            iteration_max: 150,
        };
        let field = render_escape_field(&params);
        let output = std::env::temp_dir().join("mandelbrot_2.png");
        save_png(&params, &field, &output).expect("écriture PNG");
        assert!(output.exists());
        std::fs::remove_file(&output).ok();
    }

    #[test]
    #[should_panic]
    fn test_save_png_rejects_mismatched_field() {
        let params = FieldParams {
            resolution: 8,
            center_x: 0.0,
            center_y: 0.0,
            extent: 3.0,
            exponent: 2,
            iteration_max: 150,
        };
        let field = vec![0u32; 7];
        let output = std::env::temp_dir().join("mandelbrot_bad.png");
        let _ = save_png(&params, &field, &output);
    }
}
