/// Format the welcome line shown by the demo.
#[must_use]
pub fn greet(name: &str) -> String {
    format!("Hello, {name}! Welcome to CodeLab IDE.")
}
