/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “BloomWatch” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! command line tool to check which GIBS vegetation composites are actually served
//! for a given date

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use strum::IntoEnumIterator;

use bloom_gibs::probe::probe_layer;
use bloom_gibs::{align_date, layer_for, GibsLayerType};

#[derive(Parser)]
#[command(about = "probe GIBS tile availability for 16-day vegetation composites")]
struct Args {
    /// layer to probe (ndvi, evi, viirs-ndvi); probes all layers if omitted
    #[arg(long)]
    layer: Option<GibsLayerType>,

    /// requested date (YYYY-MM-DD), snapped to the composite grid; defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let requested = args.date.unwrap_or_else( || bloom_common::datetime::utc_now().date_naive());
    let aligned = align_date(requested);

    let layer_types: Vec<GibsLayerType> = match args.layer {
        Some(lt) => vec![lt],
        None => GibsLayerType::iter().collect()
    };

    let client = reqwest::Client::new();
    println!("probing composite {} (requested {})", aligned, requested);

    for lt in layer_types {
        let layer = layer_for(lt);
        let report = probe_layer( &client, layer, aligned).await?;

        println!("\n{} : {}", layer.id, if report.is_available() {"AVAILABLE"} else {"NOT AVAILABLE"});
        for r in &report.results {
            println!("  [{:>13}] status {} length {:?}", r.name, r.status, r.content_length);
        }
    }

    Ok(())
}
