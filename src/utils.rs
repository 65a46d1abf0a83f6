use std::io::{self, Write};
use std::sync::Once;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};

const CURSOR_SHOW: &str = "\x1B[?25h";
const ATTR_RESET: &str = "\x1B[0m";

static PANIC_HOOK_INSTALLED: Once = Once::new();

/// Leave raw mode and the alternate screen, show the cursor.
///
/// Best effort; safe to call when the terminal was never switched.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
    let _ = stdout.write_all(format!("{CURSOR_SHOW}{ATTR_RESET}").as_bytes());
    let _ = stdout.flush();
}

/// Restore the terminal before the default panic message is printed.
/// Installs once no matter how often it is called.
pub fn install_terminal_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore_terminal();
            default_hook(panic_info);
        }));
    });
}

/// Truncate by character count, not byte count.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

/// Greedy word wrap to `width` columns; long words are kept whole.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if line.is_empty() { 0 } else { 1 } + word.chars().count();
            if !line.is_empty() && line.chars().count() + needed > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
        assert_eq!(truncate("hello", 2), "...");
    }

    #[test]
    fn test_wrap() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
        assert_eq!(wrap("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap("supercalifragilistic", 5), vec!["supercalifragilistic"]);
    }
}
