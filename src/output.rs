use std::path::Path;

use serde::Serialize;

use crate::convert::ConversionRequest;

#[derive(Serialize)]
struct ConversionReport<'a> {
    input: &'a Path,
    output: &'a Path,
    title: &'a str,
    date: &'a str,
}

pub(crate) fn output_json(request: &ConversionRequest) -> String {
    let report = ConversionReport {
        input: &request.input_path,
        output: &request.output_path,
        title: &request.title,
        date: &request.timestamp,
    };
    serde_json::to_string(&report).unwrap_or_default()
}

pub(crate) fn print_result(request: &ConversionRequest) {
    println!("Created {}", request.output_path.display());
}
