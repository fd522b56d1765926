use chrono::Local;

fn timestamp() -> String {
    Local::now().format("%H:%M:%S%.3f").to_string()
}

pub fn log_line(line: &str) {
    eprintln!("[{}] {}", timestamp(), line);
}

pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    log_line(&format!("ERROR: {}: {}", prefix, e));
}

pub fn log_command(program: &str, args: &[String]) {
    let joined = args.join(" ");
    log_line(&format!("RUN: {} {}", program, joined));
}
