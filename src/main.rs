// src/main.rs
//
// Calculatrice postfixe — point d’entrée NATIF + WEB (WASM)
// ---------------------------------------------------------
// But:
// - NATIF : ligne de commande (clap)
//     * `--console` ou une EXPRESSION en argument : coquille console (RESULT: …)
//     * sinon : fenêtre eframe::run_native
// - WEB (wasm32) : eframe::WebRunner + <canvas id="the_canvas_id">
//
// Le noyau (lib.rs) ne fait aucune E/S ; tout l’affichage vit ici, dans app/ et console.rs.

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
#[cfg(not(target_arch = "wasm32"))]
mod console;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice postfixe";

/* ------------------------ Ligne de commande (natif) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use calculatrice_postfixe::noyau::{lecture::CHIFFRES_DEFAUT, Lecture, Options, Regroupement};
    use clap::Parser;
    use log::LevelFilter;

    /// Calculatrice d’expressions arithmétiques (+ - * / et parenthèses).
    ///
    /// Par défaut chaque caractère numérique est un nombre à lui seul ("12" = 1 puis 2).
    #[derive(Parser, Debug)]
    #[command(version, about, long_about = None)]
    pub struct Args {
        /// Mode console : lit une ligne sur l’entrée standard.
        #[arg(short, long)]
        pub console: bool,

        /// Lit les nombres entiers/décimaux sur plusieurs caractères ("12.5").
        #[arg(short, long)]
        pub nombres: bool,

        /// Règle historique : même précédence regroupée à droite (9-3-2 = 8).
        #[arg(long)]
        pub historique: bool,

        /// Échoue sur une parenthèse orpheline au lieu de la tolérer.
        #[arg(long)]
        pub parentheses_strictes: bool,

        /// Chiffres décimaux affichés (0..=200).
        #[arg(long, default_value_t = CHIFFRES_DEFAUT)]
        pub chiffres: usize,

        /// Niveau du journal (off, error, warn, info, debug, trace).
        #[arg(long, default_value_t = LevelFilter::Warn)]
        pub journal: LevelFilter,

        /// Expression à évaluer (implique le mode console).
        pub expression: Option<String>,
    }

    impl Args {
        pub fn options(&self) -> Options {
            Options {
                lecture: if self.nombres {
                    Lecture::Nombre
                } else {
                    Lecture::Chiffre
                },
                regroupement: if self.historique {
                    Regroupement::Historique
                } else {
                    Regroupement::Gauche
                },
                parentheses_strictes: self.parentheses_strictes,
            }
        }

        pub fn mode_console(&self) -> bool {
            self.console || self.expression.is_some()
        }
    }
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;
    use simple_logger::SimpleLogger;

    let args = cli::Args::parse();

    if let Err(e) = SimpleLogger::new().with_level(args.journal).init() {
        eprintln!("journal indisponible : {e}");
    }

    let options_calc = args.options();

    if args.mode_console() {
        let code = console::executer(args.expression.as_deref(), &options_calc, args.chiffres);
        std::process::exit(code);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([480.0, 620.0])
            .with_min_inner_size([380.0, 480.0]),
        ..Default::default()
    };

    let mut app = AppCalc::default();
    app.options = options_calc;
    app.set_chiffres(args.chiffres);

    eframe::run_native(TITRE_APP, options, Box::new(|_cc| Ok(Box::new(app))))
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        // journal -> console du navigateur (déjà initialisé si la page recharge le module)
        let _ = console_log::init_with_level(log::Level::Warn);

        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
