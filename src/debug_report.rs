use uascope::{ClientRecord, Detection};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(detection: &Detection, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Detecting: \"{}\"", detection.text), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Client ━━━", ansi::GRAY));
    if detection.client.is_unknown() {
        println!("{}", palette.dim("  No client identified"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • The text carries no browser or application token");
        println!("  • The text was screened as a build number or identifier");
        println!("  • Client hints were empty or all placeholder brands");
        println!("\n{}", palette.dim("  Tip: Set UASCOPE_DEBUG_RULES=1 to see rule evaluation details"));
    } else {
        print_client(&detection.client, &palette);
    }

    if let Some(details) = &detection.details {
        println!("\n{}", palette.paint("━━━ Trace ━━━", ansi::GRAY));
        println!(
            "  {} {}",
            palette.dim("cache:"),
            if details.cache_hit {
                palette.paint("hit", ansi::GREEN)
            } else {
                palette.dim("miss")
            }
        );
        match &details.matched_pattern {
            Some(pattern) => {
                println!("  {} {}", palette.dim("rule:"), palette.paint(pattern, ansi::CYAN))
            }
            None => println!("  {} {}", palette.dim("rule:"), palette.dim("none")),
        }
        println!(
            "  {} {}",
            palette.dim("reconciliation:"),
            palette.paint(details.reconciliation, ansi::BLUE)
        );
        if let Some(strategy) = details.secondary_strategy {
            println!("  {} {}", palette.dim("secondary:"), palette.paint(strategy, ansi::BLUE));
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", detection.elapsed), ansi::GREEN));
    println!();
}

fn print_client(client: &ClientRecord, palette: &ansi::Palette) {
    println!(
        "  {} {}",
        palette.bold(palette.paint(&client.name, ansi::GREEN)),
        if client.version.is_empty() {
            palette.dim("(no version)")
        } else {
            palette.paint(&client.version, ansi::YELLOW)
        }
    );
    println!(
        "      {} {}  {} {}",
        palette.dim("short:"),
        palette.paint(field_or_dash(&client.short_name), ansi::BLUE),
        palette.dim("│ family:"),
        palette.paint(field_or_dash(&client.family), ansi::BLUE)
    );
    println!(
        "      {} {}  {} {}",
        palette.dim("engine:"),
        palette.paint(field_or_dash(&client.engine), ansi::CYAN),
        palette.dim("│ version:"),
        palette.paint(field_or_dash(&client.engine_version), ansi::CYAN)
    );
    if !client.app_id.is_empty() {
        println!("      {} {}", palette.dim("app id:"), palette.paint(&client.app_id, ansi::YELLOW));
    }
    if let Some(secondary) = client.secondary_client.as_deref() {
        println!(
            "      {} {} {}",
            palette.dim("embedded:"),
            palette.paint(&secondary.name, ansi::GREEN),
            palette.paint(field_or_dash(&secondary.version), ansi::YELLOW)
        );
    }
}

fn field_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
