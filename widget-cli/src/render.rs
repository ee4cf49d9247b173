use chrono::Local;
use weather_widget_core::WidgetView;

/// Plain-text rendering of the widget for a terminal.
pub fn render(view: &WidgetView) -> String {
    let mut out = String::new();

    if let Some(error) = &view.error {
        out.push_str(&format!("  ! {error}\n"));
    }

    if let Some(lines) = &view.result {
        out.push_str(&format!("  Temperature: {}\n", lines.temperature));
        out.push_str(&format!("  Conditions:  {}\n", lines.condition));
        out.push_str(&format!("  Location:    {}\n", lines.location));
        out.push_str(&format!("  (checked at {})\n", Local::now().format("%H:%M")));
    }

    out
}

pub fn header(view: &WidgetView) -> String {
    format!("{}\n{}\n", view.title, view.description)
}
