// SPDX-FileCopyrightText: © 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::{Context, Result};
use clap::{command, value_parser, Arg, ArgMatches, Command};
use foundation_c32check::{
    address::{self, b58_to_c32, c32_address, c32_address_decode, c32_to_b58},
    c32_decode, c32_encode, c32check_decode, c32check_encode, checked_version, Error,
};

const C32_VERSION_HELP: &str = "c32check version, between 0 and 31";

fn main() -> Result<()> {
    env_logger::init();

    let matches = command!()
        .subcommand_required(true)
        .subcommand(
            Command::new("encode")
                .about("Encode a hex string as c32")
                .arg(hex_arg())
                .arg(min_length_arg("Minimum length of the c32 string, in symbols")),
        )
        .subcommand(
            Command::new("decode")
                .about("Decode a c32 string to hex")
                .arg(
                    Arg::new("c32")
                        .value_name("c32")
                        .required(true)
                        .help("c32 string"),
                )
                .arg(min_length_arg("Minimum length of the hex string, in bytes")),
        )
        .subcommand(
            Command::new("check-encode")
                .about("Encode a hex string as c32check")
                .arg(version_arg(C32_VERSION_HELP).required(true))
                .arg(hex_arg()),
        )
        .subcommand(
            Command::new("check-decode")
                .about("Decode a c32check string")
                .arg(
                    Arg::new("c32check")
                        .value_name("c32check")
                        .required(true)
                        .help("c32check string"),
                ),
        )
        .subcommand(
            Command::new("address")
                .about("Encode a HASH160 as a Stacks address")
                .arg(version_arg(C32_VERSION_HELP).required(true))
                .arg(
                    Arg::new("hash160")
                        .value_name("hash160")
                        .required(true)
                        .help("HASH160 as 40 hex digits"),
                ),
        )
        .subcommand(
            Command::new("address-decode")
                .about("Decode a Stacks address")
                .arg(address_arg()),
        )
        .subcommand(
            Command::new("b58-to-c32")
                .about("Convert a Bitcoin base58check address to a Stacks address")
                .arg(
                    Arg::new("base58")
                        .value_name("base58")
                        .required(true)
                        .help("Bitcoin base58check address"),
                )
                .arg(version_arg(C32_VERSION_HELP).long("stacks-version")),
        )
        .subcommand(
            Command::new("c32-to-b58")
                .about("Convert a Stacks address to a Bitcoin base58check address")
                .arg(address_arg())
                .arg(version_arg("Bitcoin version byte").long("bitcoin-version")),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("encode", m)) => {
            let encoded = c32_encode(hex(m), min_length(m)).context("failed to encode")?;
            println!("{encoded}");
        }
        Some(("decode", m)) => {
            let c32 = m.get_one::<String>("c32").unwrap();
            let decoded = c32_decode(c32, min_length(m)).context("failed to decode")?;
            println!("{decoded}");
        }
        Some(("check-encode", m)) => {
            let version = version(m)?.unwrap();
            let encoded = c32check_encode(version, hex(m)).context("failed to encode")?;
            println!("{encoded}");
        }
        Some(("check-decode", m)) => {
            let c32check = m.get_one::<String>("c32check").unwrap();
            let (version, data) = c32check_decode(c32check).context("failed to decode")?;
            print_decoded(version, &data);
        }
        Some(("address", m)) => {
            let version = version(m)?.unwrap();
            let hash160 = m.get_one::<String>("hash160").unwrap();
            let address = c32_address(version, hash160).context("failed to encode address")?;
            println!("{address}");
        }
        Some(("address-decode", m)) => {
            let address = m.get_one::<String>("address").unwrap();
            let (version, hash160) =
                c32_address_decode(address).context("failed to decode address")?;
            print_decoded(version, &hash160);

            if let Some((network, kind)) = address::network(version) {
                println!("{:>17}: {network:?}", "Network");
                println!("{:>17}: {kind:?}", "Type");
            }
        }
        Some(("b58-to-c32", m)) => {
            let b58 = m.get_one::<String>("base58").unwrap();
            let address = b58_to_c32(b58, version(m)?).context("failed to convert address")?;
            println!("{address}");
        }
        Some(("c32-to-b58", m)) => {
            let c32 = m.get_one::<String>("address").unwrap();
            let address = c32_to_b58(c32, bitcoin_version(m)?).context("failed to convert address")?;
            println!("{address}");
        }
        _ => unreachable!("a subcommand is required"),
    }

    Ok(())
}

fn hex_arg() -> Arg {
    Arg::new("hex")
        .value_name("hex")
        .required(true)
        .help("Big-endian hex string")
}

fn address_arg() -> Arg {
    Arg::new("address")
        .value_name("address")
        .required(true)
        .help("Stacks address")
}

fn min_length_arg(help: &'static str) -> Arg {
    Arg::new("min-length")
        .short('m')
        .long("min-length")
        .value_parser(value_parser!(usize))
        .help(help)
}

// Signed so that negative versions are reported as invalid versions and not
// as unknown flags.
fn version_arg(help: &'static str) -> Arg {
    Arg::new("version")
        .value_name("version")
        .allow_negative_numbers(true)
        .value_parser(value_parser!(i64))
        .help(help)
}

fn hex(matches: &ArgMatches) -> &str {
    matches.get_one::<String>("hex").unwrap()
}

fn min_length(matches: &ArgMatches) -> Option<usize> {
    matches.get_one::<usize>("min-length").copied()
}

fn version(matches: &ArgMatches) -> Result<Option<u8>> {
    matches
        .get_one::<i64>("version")
        .copied()
        .map(checked_version)
        .transpose()
        .context("invalid version")
}

fn bitcoin_version(matches: &ArgMatches) -> Result<Option<u8>> {
    matches
        .get_one::<i64>("version")
        .map(|&v| u8::try_from(v).map_err(|_| Error::InvalidVersion))
        .transpose()
        .context("invalid bitcoin version")
}

fn print_decoded(version: u8, data: &str) {
    println!("{:>17}: {version}", "Version");
    println!("{:>17}: {data}", "Data");
}
