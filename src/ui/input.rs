/// Editable non-negative number field
#[derive(Debug, Clone)]
pub struct QuantityInput {
    buffer: String,
    step: f64,
}

impl QuantityInput {
    pub fn new(initial: f64, step: f64) -> Self {
        Self {
            buffer: format_value(initial.max(0.0)),
            step,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Current value; an empty field reads as zero
    pub fn value(&self) -> f64 {
        if self.buffer.is_empty() || self.buffer == "." {
            return 0.0;
        }
        self.buffer.parse().unwrap_or(0.0)
    }

    /// Accept digits and a single decimal separator. Returns whether the
    /// text changed.
    pub fn push(&mut self, c: char) -> bool {
        match c {
            '0'..='9' => {
                if self.buffer == "0" {
                    self.buffer.clear();
                }
                self.buffer.push(c);
                true
            }
            '.' | ',' if !self.buffer.contains('.') => {
                if self.buffer.is_empty() {
                    self.buffer.push('0');
                }
                self.buffer.push('.');
                true
            }
            _ => false,
        }
    }

    pub fn backspace(&mut self) -> bool {
        self.buffer.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn increment(&mut self) {
        self.buffer = format_value(self.value() + self.step);
    }

    /// Step down, never below zero
    pub fn decrement(&mut self) {
        self.buffer = format_value((self.value() - self.step).max(0.0));
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}
