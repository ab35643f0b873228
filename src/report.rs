//! Tab-separated reports of the network parameters and trajectories.
use std::collections::BTreeMap;
use std::io::Write;

use crate::error::SNNError;
use crate::network::Network;
use crate::neuron::{Neuron, NeuronType};

/// Write one line per neuron with its type, parameters, out-degree and total outgoing strength.
pub fn print_params<W: Write>(network: &Network, out: &mut W) -> Result<(), SNNError> {
    writeln!(out, "Type\ta\tb\tc\td\tInhibitory\tdegree\tvalence")?;
    for (id, neuron) in network.neurons().iter().enumerate() {
        let (degree, valence) = network.degree(id);
        writeln!(out, "{}\t{}\t{}", neuron.formatted_params(), degree, valence)?;
    }
    Ok(())
}

/// Write the header of the trajectory table, i.e., the v, u and I columns of every reported type.
pub fn print_head<W: Write>(
    type_counts: &BTreeMap<String, usize>,
    network: &Network,
    out: &mut W,
) -> Result<(), SNNError> {
    for neuron in reported_neurons(type_counts, network) {
        let name = neuron.neuron_type();
        write!(out, "\t{}.v\t{}.u\t{}.I", name, name, name)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Write the state of the first neuron of every reported type at the given time.
pub fn print_traj<W: Write>(
    time: usize,
    type_counts: &BTreeMap<String, usize>,
    network: &Network,
    out: &mut W,
) -> Result<(), SNNError> {
    write!(out, "{}", time)?;
    for neuron in reported_neurons(type_counts, network) {
        write!(out, "\t{}", neuron.formatted_values())?;
    }
    writeln!(out)?;
    Ok(())
}

/// The first neuron of each requested type, in name order, followed by the first regular-spiking
/// neuron when the requested counts do not cover the whole network.
fn reported_neurons<'a>(
    type_counts: &BTreeMap<String, usize>,
    network: &'a Network,
) -> Vec<&'a Neuron> {
    let first_of = move |neuron_type: NeuronType| {
        network
            .neurons()
            .iter()
            .find(|neuron| neuron.is_type(neuron_type))
    };

    let mut reported: Vec<&Neuron> = type_counts
        .keys()
        .filter_map(|name| name.parse::<NeuronType>().ok())
        .filter_map(first_of)
        .collect();

    let total = type_counts
        .values()
        .fold(0usize, |total, &count| total.saturating_add(count));
    if total < network.size() {
        reported.extend(first_of(NeuronType::RS));
    }
    reported
}
