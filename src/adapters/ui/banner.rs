//! ASCII banner with gradient (NUTRIAI).

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::ExecutableCommand;
use figlet_rs::FIGfont;
use std::io::{stdout, Write};

/// Fresh Green (#4caf50).
const FRESH_GREEN: (u8, u8, u8) = (0x4c, 0xaf, 0x50);
/// Citrus Yellow (#ffc107).
const CITRUS_YELLOW: (u8, u8, u8) = (0xff, 0xc1, 0x07);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Prints the welcome banner: "NUTRIAI" in figlet ASCII with a gradient
/// from Fresh Green to Citrus Yellow, then version and tagline.
pub fn print_welcome() {
    let mut out = stdout();
    let Ok(font) = FIGfont::standard() else {
        let _ = writeln!(out, "NutriAI");
        return;
    };
    let Some(figure) = font.convert("NUTRIAI") else {
        let _ = writeln!(out, "NutriAI");
        return;
    };
    let art = figure.to_string();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(FRESH_GREEN, CITRUS_YELLOW, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: FRESH_GREEN.0,
        g: FRESH_GREEN.1,
        b: FRESH_GREEN.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n", version)));
    let _ = out.execute(Print("Your Advanced Nutrition Assistant\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
