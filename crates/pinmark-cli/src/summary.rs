use std::path::Path;

use console::Style;
use pinmark_core::session::Session;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_session_summary(session: &Session, input: &Path, output: &Path) {
    let s = Styles::new();
    let (width, height) = session.canvas_size();
    let transform = session.transform();
    let controls = session.controls();

    println!();
    println!("  {}", s.title.apply_to("Pinmark"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(7)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Canvas"),
        s.value.apply_to(format!("{width}x{height} px"))
    );
    println!();

    println!("  {}", s.header.apply_to("View"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("{:.3}", transform.scale))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Offset"),
        s.value
            .apply_to(format!("{}, {}", transform.offset_x, transform.offset_y))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Zoom"),
        s.method.apply_to(session.config().zoom.policy)
    );
    println!();

    println!("  {}", s.header.apply_to("Markers"));
    let positions = session.marker_screen_positions();
    if positions.is_empty() {
        println!("    {}", s.disabled.apply_to("none"));
    }
    for (number, p) in positions {
        let at = if p.is_finite() {
            format!("({:.1}, {:.1})", p.x, p.y)
        } else {
            "not drawable".to_string()
        };
        println!(
            "    {:<12}{}",
            s.label.apply_to(format!("#{number}")),
            s.value.apply_to(at)
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Style"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Circle"),
        s.value.apply_to(format!(
            "{} px {}",
            controls.circle_size, controls.circle_color
        ))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Numbers"),
        s.value
            .apply_to(format!("{} px {}", controls.font_size, controls.font_color))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Glyphs"),
        s.method.apply_to(session.renderer().glyphs())
    );
}
