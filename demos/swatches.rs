use std::{error::Error,
          fs::File,
          io::{BufWriter, Write}};
use color_schemer::{analog_scheme, brightness_scheme, to_rgb8,
                    BrightnessOptions, Rgb, Seed};

type Err = Box<dyn Error>;

fn css_string(c: Rgb) -> String {
    let c = to_rgb8(c);
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn table_of_colors(fh: &mut impl Write, colors: &[Rgb],
                   comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px; border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: 43px; height: 30px; \
                      background-color: {}\"></td>",
                 css_string(c))?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td>\
                  </tr></table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("swatches.html")?);
    let rng = &mut rand::thread_rng();
    writeln!(fh, "<html>\n\
                  <head><title>color-schemer swatches</title></head>\n\
                  <body>")?;

    writeln!(fh, "<h3>Analog schemes</h3>")?;
    for p in [3, 5, 8, 12] {
        let colors = analog_scheme(p, Seed::Random, rng)?;
        table_of_colors(&mut fh, &colors, &format!("random, {p} colors"))?;
    }
    for (r, g, b) in [(200, 40, 40), (30, 30, 220), (40, 180, 90)] {
        let seed = Seed::Color(Rgb { r, g, b });
        let colors = analog_scheme(7, seed, rng)?;
        table_of_colors(&mut fh, &colors,
                        &format!("from ({r}, {g}, {b})"))?;
    }

    writeln!(fh, "<h3>Brightness ramps</h3>")?;
    for (seed, comment) in [(Rgb { r: 120, g: 20, b: 60 }, "crimson"),
                            (Rgb { r: 20, g: 60, b: 120 }, "navy"),
                            (Rgb { r: 100, g: 100, b: 100 }, "gray")] {
        let opts = BrightnessOptions { count: 6.0, complex: true,
                                       forward: true,
                                       seed: Seed::Color(seed) };
        let colors = brightness_scheme(&opts, rng)?;
        table_of_colors(&mut fh, &colors, comment)?;
    }

    writeln!(fh, "<h3>Single lightened colors</h3>")?;
    let base = Rgb { r: 120, g: 20, b: 60 };
    let mut row = vec![base];
    for pct in [20.0, 40.0, 60.0, 80.0, 100.0] {
        let opts = BrightnessOptions { count: pct, complex: false,
                                       forward: true,
                                       seed: Seed::Color(base) };
        row.extend(brightness_scheme(&opts, rng)?);
    }
    table_of_colors(&mut fh, &row, "crimson, lightened by 0–100%")?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
