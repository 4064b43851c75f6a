/// Stand-in for the installer's modal dialogs. The launcher runs
/// headless, so user-facing warnings and errors land on stderr, separate
/// from the diagnostic log stream.
pub trait Notifier {
    fn warn(&self, message: &str);
    fn fatal(&self, message: &str);
}

pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn warn(&self, message: &str) {
        eprintln!("warning: {message}");
    }

    fn fatal(&self, message: &str) {
        eprintln!("error: {message}");
    }
}
