// Result sinks: where validated Clar structures go

use std::collections::BTreeMap;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// One validated p-anionic Clar structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClarStructure {
    pub graph_id: usize,
    pub p: usize,
    pub num_res_faces: usize,
    /// All resonant faces, ascending
    pub resonant_faces: Vec<usize>,
    /// The pentagons among `resonant_faces`, ascending
    pub resonant_pentagons: Vec<usize>,
    /// Matching edges, ascending
    pub matching_edges: Vec<usize>,
}

impl ClarStructure {
    /// Resonant faces that are not pentagons
    pub fn resonant_others(&self) -> Vec<usize> {
        self.resonant_faces
            .iter()
            .copied()
            .filter(|f| !self.resonant_pentagons.contains(f))
            .collect()
    }
}

impl fmt::Display for ClarStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "graph {} p = {}: {} resonant faces {:?} (pentagons {:?}), matching edges {:?}",
            self.graph_id, self.p, self.num_res_faces, self.resonant_faces, self.resonant_pentagons, self.matching_edges
        )
    }
}

/// Receiver of enumeration results
pub trait ResultSink {
    fn record(&mut self, structure: &ClarStructure) -> io::Result<()>;

    /// No structure exists for this (graph, p)
    fn record_none(&mut self, graph_id: usize, p: usize) -> io::Result<()>;

    /// Flush and close; call once after the last graph
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Keeps everything in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub structures: Vec<ClarStructure>,
    /// (graph_id, p) pairs without any structure
    pub none: Vec<(usize, usize)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Structures recorded for one (graph, p)
    pub fn structures_for(&self, graph_id: usize, p: usize) -> Vec<&ClarStructure> {
        self.structures
            .iter()
            .filter(|s| s.graph_id == graph_id && s.p == p)
            .collect()
    }
}

impl ResultSink for MemorySink {
    fn record(&mut self, structure: &ClarStructure) -> io::Result<()> {
        self.structures.push(structure.clone());
        Ok(())
    }

    fn record_none(&mut self, graph_id: usize, p: usize) -> io::Result<()> {
        self.none.push((graph_id, p));
        Ok(())
    }
}

/// Base names of the per-p result files
pub const OUTPUT_FILE_NAMES: [&str; 6] = [
    "pp_anionic_clar_num",
    "pp_r_pent",
    "pp_r_hex",
    "pp_match_e",
    "pp_graph_id",
    "pp_full",
];

struct OutputFiles {
    clar_num: BufWriter<File>,
    r_pent: BufWriter<File>,
    r_hex: BufWriter<File>,
    match_e: BufWriter<File>,
    graph_id: BufWriter<File>,
    full: BufWriter<File>,
}

impl OutputFiles {
    fn create(dir: &Path, p: usize) -> io::Result<Self> {
        let open = |name: &str| -> io::Result<BufWriter<File>> {
            Ok(BufWriter::new(File::create(dir.join(format!("{}_{}", name, p)))?))
        };
        Ok(OutputFiles {
            clar_num: open(OUTPUT_FILE_NAMES[0])?,
            r_pent: open(OUTPUT_FILE_NAMES[1])?,
            r_hex: open(OUTPUT_FILE_NAMES[2])?,
            match_e: open(OUTPUT_FILE_NAMES[3])?,
            graph_id: open(OUTPUT_FILE_NAMES[4])?,
            full: open(OUTPUT_FILE_NAMES[5])?,
        })
    }

    /// One line per file; all six stay aligned line by line
    fn write(&mut self, graph_id: usize, num: usize, pents: &[usize], others: &[usize], edges: &[usize]) -> io::Result<()> {
        writeln!(self.clar_num, "{}", num)?;
        writeln!(self.r_pent, "{}", join(pents))?;
        writeln!(self.r_hex, "{}", join(others))?;
        writeln!(self.match_e, "{}", join(edges))?;
        writeln!(self.graph_id, "{}", graph_id)?;
        writeln!(
            self.full,
            "{} {} | {} | {} | {}",
            graph_id,
            num,
            join(pents),
            join(others),
            join(edges)
        )
    }

    fn flush(&mut self) -> io::Result<()> {
        self.clar_num.flush()?;
        self.r_pent.flush()?;
        self.r_hex.flush()?;
        self.match_e.flush()?;
        self.graph_id.flush()?;
        self.full.flush()
    }
}

fn join(ids: &[usize]) -> String {
    ids.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(" ")
}

/// Six result files per requested p, open for the whole run
pub struct FileSink {
    dir: PathBuf,
    files: BTreeMap<usize, OutputFiles>,
}

impl FileSink {
    pub fn create<P: AsRef<Path>>(dir: P, ps: &[usize]) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        let mut files = BTreeMap::new();
        for &p in ps {
            if !files.contains_key(&p) {
                files.insert(p, OutputFiles::create(&dir, p)?);
            }
        }
        Ok(FileSink { dir, files })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of one result file
    pub fn path(&self, name: &str, p: usize) -> PathBuf {
        self.dir.join(format!("{}_{}", name, p))
    }

    fn files_for(&mut self, p: usize) -> io::Result<&mut OutputFiles> {
        self.files.get_mut(&p).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("no result files open for p = {}", p))
        })
    }
}

impl ResultSink for FileSink {
    fn record(&mut self, s: &ClarStructure) -> io::Result<()> {
        let others = s.resonant_others();
        self.files_for(s.p)?
            .write(s.graph_id, s.num_res_faces, &s.resonant_pentagons, &others, &s.matching_edges)
    }

    fn record_none(&mut self, graph_id: usize, p: usize) -> io::Result<()> {
        self.files_for(p)?.write(graph_id, 0, &[], &[], &[])
    }

    fn finish(&mut self) -> io::Result<()> {
        for files in self.files.values_mut() {
            files.flush()?;
        }
        Ok(())
    }
}
