use std::path::PathBuf;

use clap::Parser;

mod color;
mod fractal;
mod io;
mod render;

use fractal::{default_params_for_exponent, exponent_from_arg};
use io::png::save_png;
use render::render_escape_field;

/// Utilitaire CLI pour générer des ensembles de Mandelbrot généralisés.
///
/// Exemple d'utilisation :
///   multibrot-cli 3
///
/// produit mandelbrot_3.png (z^3 + c) dans le répertoire courant.
#[derive(Parser, Debug)]
#[command(
    name = "multibrot-cli",
    about = "Générateur d'ensembles de Mandelbrot généralisés (z^n + c) en ligne de commande",
    version
)]
struct Cli {
    /// Exposant n de la récurrence z^n + c (entier >= 2, défaut 2).
    /// Toute valeur non entière ou < 2 retombe silencieusement sur 2.
    exponent: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Repli silencieux sur 2 si l'argument est absent ou invalide.
    let exponent = exponent_from_arg(cli.exponent.as_deref());
    println!("exponent: {exponent}");

    let params = default_params_for_exponent(exponent);

    // Calcul escape-time.
    let field = render_escape_field(&params);

    // Export PNG, nommé d'après l'exposant effectif.
    let output = PathBuf::from(format!("mandelbrot_{exponent}.png"));
    if let Err(e) = save_png(&params, &field, &output) {
        eprintln!("Erreur lors de l'écriture du PNG: {e}");
        std::process::exit(1);
    }
}
