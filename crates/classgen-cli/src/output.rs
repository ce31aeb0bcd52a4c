//! Terminal output formatting.

use classgen_core::ClassInfo;
use colored::Colorize;

/// Print the descendants of a class, one per line.
pub fn print_descendants(class_name: &str, descendants: &[&ClassInfo]) {
    if descendants.is_empty() {
        println!("{}", format!("{} has no subclasses.", class_name).dimmed());
        return;
    }

    println!(
        "{} {}",
        class_name.cyan().bold(),
        format!("({} subclasses)", descendants.len()).dimmed()
    );
    for info in descendants {
        println!("  {:<40} {}", info.class_name, info.include_path.dimmed());
    }
}

/// Print rendered include lines verbatim.
pub fn print_include_lines(lines: &[String]) {
    for line in lines {
        print!("{}", line);
    }
}

pub fn print_unknown_class(class_name: &str) {
    println!("{} {}", "?".yellow().bold(), format!("Unknown class: {}", class_name).dimmed());
}
