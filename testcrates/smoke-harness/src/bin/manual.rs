#[path = "../cases.rs"]
mod cases;

fn main() {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("--abort") => noon::run_all(true),
        Some("--named") => noon::run_named(&args.next().unwrap_or_default()),
        _ => noon::run_all(false),
    }
    println!("main completed");
}
