//! ASCII art banner for interactive mode.

use std::io::IsTerminal;

/// ANSI true-color escape sequences for the banner palette.
struct Colors {
    title: &'static str,
    subtitle: &'static str,
    reset: &'static str,
}

const COLOR: Colors = Colors {
    title: "\x1b[1;38;2;120;180;220m",
    subtitle: "\x1b[38;2;100;100;120m",
    reset: "\x1b[0m",
};

const PLAIN: Colors = Colors {
    title: "",
    subtitle: "",
    reset: "",
};

/// Prints the roster banner to stdout.
///
/// Renders ANSI true-color when stdout is a terminal,
/// falls back to plain text otherwise.
pub fn print_banner() {
    let c = if std::io::stdout().is_terminal() {
        &COLOR
    } else {
        &PLAIN
    };

    let tt = c.title;
    let st = c.subtitle;
    let r = c.reset;

    println!(
        r#"
{tt}    ____  ____  _____________________ {r}
{tt}   / __ \/ __ \/ ___/_  __/ ____/ __ \{r}
{tt}  / /_/ / / / /\__ \ / / / __/ / /_/ /{r}
{tt} / _, _/ /_/ /___/ // / / /___/ _, _/ {r}
{tt}/_/ |_|\____//____//_/ /_____/_/ |_|  {r}

{st}departments · roles · employees{r}
"#
    );
}
