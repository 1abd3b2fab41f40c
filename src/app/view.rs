use crate::calendar::format;
use crate::calendar::CalendarEvent;

/// Rendering seam, implemented once per UI target
pub trait View {
    fn render_event_list(&mut self, events: &[CalendarEvent]);
    fn render_details(&mut self, text: &str);
    fn render_reminders(&mut self, lines: &[String]);
}

/// Terminal implementation writing to standard output
#[derive(Debug, Default)]
pub struct CliView;

impl View for CliView {
    fn render_event_list(&mut self, events: &[CalendarEvent]) {
        if events.is_empty() {
            println!("(no events)");
            return;
        }
        for (index, event) in events.iter().enumerate() {
            println!("{}: {}", index, format::summary_line(event));
        }
    }

    fn render_details(&mut self, text: &str) {
        print!("{}", text);
    }

    fn render_reminders(&mut self, lines: &[String]) {
        if lines.is_empty() {
            println!("(no reminders)");
            return;
        }
        for line in lines {
            println!("{}", line);
        }
    }
}
