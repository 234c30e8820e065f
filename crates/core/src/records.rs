//! Lecture et écriture des gènes au format CSV entièrement guillemeté
//!
//! Une ligne par gène: `"identifiant","séquence","propension"`.
//! Les guillemets internes sont doublés.

use crate::error::{GeneError, Result};
use crate::gene::GeneRecord;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info};

const FIELD_COUNT: usize = 3;

/// Lit tous les gènes d'une source CSV.
///
/// Le premier enregistrement invalide interrompt la lecture avec une
/// erreur; aucun résultat partiel n'est renvoyé.
pub fn read_genes<R: Read>(reader: R) -> Result<Vec<GeneRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut genes = Vec::new();
    let mut record = StringRecord::new();
    while rdr.read_record(&mut record)? {
        let line = record.position().map_or(0, |p| p.line());
        genes.push(parse_record(&record, line)?);
    }

    debug!("{} gènes lus", genes.len());
    Ok(genes)
}

fn parse_record(record: &StringRecord, line: u64) -> Result<GeneRecord> {
    if record.len() != FIELD_COUNT {
        return Err(GeneError::MalformedRecord {
            line,
            reason: format!("{} champs au lieu de {}", record.len(), FIELD_COUNT),
        });
    }

    let raw = record[2].trim();
    let propensity = raw.parse::<f64>().map_err(|_| GeneError::InvalidPropensity {
        line,
        value: raw.to_string(),
    })?;

    Ok(GeneRecord::with_propensity(&record[0], &record[1], propensity))
}

/// Charge les gènes depuis un fichier
pub fn load_genes(path: impl AsRef<Path>) -> Result<Vec<GeneRecord>> {
    let path = path.as_ref();
    let genes = read_genes(BufReader::new(File::open(path)?))?;
    info!("{} gènes chargés depuis {}", genes.len(), path.display());
    Ok(genes)
}

/// Écrit les gènes, un par ligne, tous les champs entre guillemets.
///
/// La propension est écrite avec la représentation la plus courte qui
/// redonne exactement la même valeur à la lecture.
pub fn write_genes<W: Write>(writer: W, genes: &[GeneRecord]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    for gene in genes {
        let propensity = gene.propensity().to_string();
        wtr.write_record([gene.id(), gene.sequence(), propensity.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Enregistre les gènes dans un fichier (créé ou remplacé)
pub fn save_genes(path: impl AsRef<Path>, genes: &[GeneRecord]) -> Result<()> {
    let path = path.as_ref();
    write_genes(BufWriter::new(File::create(path)?), genes)?;
    info!("{} gènes écrits dans {}", genes.len(), path.display());
    Ok(())
}
