// Confgen: Synthesizing Device Configurations from Network Topologies
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.


use confgen::topology::Topology;
use confgen::troubleshooting::troubleshooting_commands;
use confgen::{printer, synthesize, synthesize_all};

use clap::{Parser, Subcommand};
use log::*;
use std::error::Error;
use std::path::PathBuf;

mod example_topologies;
use example_topologies::*;
mod topology_file;
use topology_file::load_topology;

fn main() -> Result<(), Box<dyn Error>> {
    // initialize the env logger
    pretty_env_logger::init();

    // run clap
    let args = CommandLineArguments::parse();

    // match on the action
    match args.cmd {
        MainCommand::Config { node, pastable, source } => {
            let net = get_topology(source)?;
            let render = |config: &confgen::synthesis::DeviceConfig| {
                if pastable {
                    config.pastable()
                } else {
                    config.detailed()
                }
            };
            match node {
                Some(name) => {
                    let config = synthesize(&net, net.get_node_id(&name)?)?;
                    print!("{}", render(&config));
                }
                None => {
                    let mut num_failed = 0;
                    for (node, result) in synthesize_all(&net) {
                        match result {
                            Ok(config) => println!("{}", render(&config)),
                            Err(e) => {
                                num_failed += 1;
                                error!("No configuration for {}: {}", net.get_node(node)?.name(), e)
                            }
                        }
                    }
                    if num_failed > 0 {
                        let num_nodes = net.num_nodes();
                        warn!("{} of {} devices could not be configured", num_failed, num_nodes);
                    }
                }
            }
        }
        MainCommand::Troubleshoot { node, source } => {
            let net = get_topology(source)?;
            let commands = troubleshooting_commands(&net, net.get_node_id(&node)?)?;
            for command in commands.iter() {
                println!("{}", printer::troubleshooting_command(command));
            }
        }
        MainCommand::List { source } => {
            let net = get_topology(source)?;
            for line in printer::topology_summary(&net)? {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

fn get_topology(source: TopologySource) -> Result<Topology, Box<dyn Error>> {
    match source {
        TopologySource::File { path } => Ok(load_topology(path)?),
        TopologySource::Example { variant, topology } => {
            info!("Using the example topology {} (variant {})", topology, variant);
            get_example_topology(topology, variant)
        }
    }
}

#[derive(Parser, Debug)]
#[clap(name = "Confgen", author = "Tibor Schneider")]
struct CommandLineArguments {
    /// Action to perform
    #[clap(subcommand)]
    cmd: MainCommand,
}

#[derive(Subcommand, Debug)]
enum MainCommand {
    /// Generate the configuration of one device, or of all devices
    #[clap(name = "config")]
    Config {
        /// Name of the device. If omitted, all devices are configured.
        #[clap(short = 'n', long)]
        node: Option<String>,
        /// Strip the prompts, such that the output can be pasted into a terminal session
        #[clap(short = 'p', long)]
        pastable: bool,
        /// Where to take the topology from
        #[clap(subcommand)]
        source: TopologySource,
    },
    /// Show the troubleshooting commands of a device
    #[clap(name = "troubleshoot")]
    Troubleshoot {
        /// Name of the device
        #[clap(short = 'n', long)]
        node: String,
        /// Where to take the topology from
        #[clap(subcommand)]
        source: TopologySource,
    },
    /// List all devices with their role and neighbors
    #[clap(name = "list")]
    List {
        /// Where to take the topology from
        #[clap(subcommand)]
        source: TopologySource,
    },
}

#[derive(Subcommand, Debug)]
enum TopologySource {
    /// Read the topology from a JSON file
    #[clap(name = "file")]
    File {
        /// Path to the JSON file
        #[clap(value_parser)]
        path: PathBuf,
    },
    /// Use one of the example topologies
    #[clap(name = "example")]
    Example {
        /// Variant of the example topology
        #[clap(short = 'v', long, default_value = "0")]
        variant: usize,
        /// Topology to use
        #[clap(value_enum)]
        topology: ExampleTopology,
    },
}
