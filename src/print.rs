/// Prints a line wrapped in the ANSI `color` when `stream` is a terminal, plain otherwise.
#[macro_export]
macro_rules! colored_println {
    (stderr, $color:literal, $($arg:tt)*) => {
        if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
            eprint!(concat!("\x1b[", $color, "m"));
            eprint!($($arg)*);
            eprintln!("\x1b[0m");
        } else {
            eprintln!($($arg)*);
        }
    };
    (stdout, $color:literal, $($arg:tt)*) => {
        if std::io::IsTerminal::is_terminal(&std::io::stdout()) {
            print!(concat!("\x1b[", $color, "m"));
            print!($($arg)*);
            println!("\x1b[0m");
        } else {
            println!($($arg)*);
        }
    };
}

/// Recovered errors, red on stderr.
#[macro_export]
macro_rules! println_err {
    () => {};
    ($($arg:tt)*) => {
        $crate::colored_println!(stderr, "1;31", $($arg)*)
    };
}

/// Verbose diagnostics, blue.
#[macro_export]
macro_rules! println_info {
    () => {};
    ($($arg:tt)*) => {
        $crate::colored_println!(stdout, "1;34", $($arg)*)
    };
}

/// Section headers, magenta.
#[macro_export]
macro_rules! println_notice {
    () => {};
    ($($arg:tt)*) => {
        $crate::colored_println!(stdout, "35", $($arg)*)
    };
}
