//! Parse a request head from a file, or from stdin if no path is given.
//!
//! ```sh
//! printf 'GET http://[::1]:8080/x?y=%%41 HTTP/1.1\r\nHost: a\r\n\r\n' | RUST_LOG=debug cargo run
//! ```
use std::io::Read;

use h1grammar::{Request, RequestParser};

fn main() -> std::io::Result<()> {
    env_logger::init();

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    match RequestParser::new().parse(input) {
        Ok(req) => print(&req),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print(req: &Request) {
    let uri = req.uri();
    println!("method:    {}", req.method());
    println!("target:    {uri}");
    println!("scheme:    {:?}", uri.scheme());
    println!("user_info: {:?}", uri.user_info());
    println!("host:      {:?}", uri.host());
    println!("port:      {:?}", uri.port());
    println!("path:      {:?}", uri.path());
    println!("query:     {:?}", uri.query());
    println!("fragment:  {:?}", uri.fragment());
    println!("version:   {}", req.version());
    for (name, value) in req.headers() {
        println!("header:    {name}: {value}");
    }
    println!("head_len:  {}", req.head_len());
}
