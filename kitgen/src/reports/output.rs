//! Output trait for rendering reports.

/// Target output for reports.
///
/// Reports describe *what* to output; implementations decide *how*.
pub trait Output {
    /// Render a title/header.
    fn title(&mut self, text: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render an added item (e.g., new file).
    fn added_item(&mut self, text: &str);

    /// Render an item that was left alone.
    fn kept_item(&mut self, text: &str);

    /// Render a divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
#[derive(Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn title(&mut self, text: &str) {
        println!("{}", text);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("  {:<10} {}", format!("{}:", key), value);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn kept_item(&mut self, text: &str) {
        println!("  = {}", text);
    }

    fn divider(&mut self, label: &str) {
        println!("--- {} ---", label);
    }

    fn preformatted(&mut self, text: &str) {
        print!("{}", text);
        if !text.ends_with('\n') {
            println!();
        }
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Captures rendered lines, for tests.
#[cfg(test)]
#[derive(Default)]
pub struct Recorded(pub Vec<String>);

#[cfg(test)]
impl Output for Recorded {
    fn title(&mut self, text: &str) {
        self.0.push(format!("title {text}"));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.0.push(format!("{key}={value}"));
    }

    fn added_item(&mut self, text: &str) {
        self.0.push(format!("+ {text}"));
    }

    fn kept_item(&mut self, text: &str) {
        self.0.push(format!("= {text}"));
    }

    fn divider(&mut self, label: &str) {
        self.0.push(format!("--- {label}"));
    }

    fn preformatted(&mut self, text: &str) {
        self.0.push(text.to_string());
    }

    fn newline(&mut self) {
        self.0.push(String::new());
    }
}
