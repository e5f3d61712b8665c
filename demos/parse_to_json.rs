extern crate ogn_aprs_parser;

fn main() {
    let result = ogn_aprs_parser::parse_to_json(
        r"FLRDF0A52>APRS,qAS,LSTB:/220132h4658.70N/00707.72Ez090/054/A=001424 !W37! id06DF0A52 +020fpm +0.0rot FL001.03 55.2dB 0e -6.2kHz gps4x6 hearD7EA hearDA95",
    );

    match result {
        Ok(json) => println!("{json}"),
        Err(err) => println!("{err}"),
    };
}
