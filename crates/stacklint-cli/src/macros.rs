/// Base macro for colorizing text
/// This macro handles the common logic for all color macros
macro_rules! colorize_impl {
    ($color_expr:expr, $($arg:tt)*) => {
        {
            if atty::is(atty::Stream::Stdout) {
                format!("{}", $color_expr.paint(format!($($arg)*)))
            } else {
                format!($($arg)*)
            }
        }
    }
}

macro_rules! red {
    ($($arg:tt)*) => {
        colorize_impl!(ansi_term::Colour::Red.bold(), $($arg)*)
    }
}

macro_rules! white {
    ($($arg:tt)*) => {
        colorize_impl!(ansi_term::Colour::White.bold(), $($arg)*)
    }
}
