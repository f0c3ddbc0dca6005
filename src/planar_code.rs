// planar_code reader (output format of buckygen and plantri)
//
// Stream: optional header ">>planar_code<<" (or ">>planar_code le<<" /
// ">>planar_code be<<"), then per graph the vertex count followed by every
// vertex's neighbors in clockwise order, 1-based, each list closed by 0.
// A leading 0 byte switches the graph to 16-bit entries. Concatenated
// files repeat the header between graphs.

use std::collections::VecDeque;
use std::io::{self, BufRead, ErrorKind};

use log::debug;

use crate::error::GraphError;
use crate::graph::Fullerene;

const HEADER_PREFIX: &[u8] = b">>planar_code";
const HEADER_SUFFIX: &[u8] = b"<<";
const MAX_HEADER_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

/// Iterator over the graphs of a planar_code stream.
/// Graph ids count from 1 in stream order.
pub struct PlanarCodeReader<R: BufRead> {
    reader: R,
    endian: Endian,
    /// Bytes read while looking for a header that turned out to be graph data
    pushback: VecDeque<u8>,
    next_id: usize,
    done: bool,
}

impl<R: BufRead> PlanarCodeReader<R> {
    pub fn new(reader: R) -> Self {
        PlanarCodeReader {
            reader,
            endian: Endian::Little,
            pushback: VecDeque::new(),
            next_id: 1,
            done: false,
        }
    }

    /// Consume a header if the stream continues with the full header prefix.
    /// Anything else is left unread: a 62-vertex graph also starts with '>'.
    fn read_header(&mut self) -> Result<bool, GraphError> {
        let mut header = Vec::with_capacity(HEADER_PREFIX.len());
        while header.len() < HEADER_PREFIX.len() {
            match self.read_byte()? {
                Some(byte) => {
                    header.push(byte);
                    if byte != HEADER_PREFIX[header.len() - 1] {
                        break;
                    }
                }
                None => break,
            }
        }
        if header != HEADER_PREFIX {
            for &byte in header.iter().rev() {
                self.pushback.push_front(byte);
            }
            return Ok(false);
        }

        while !header.ends_with(HEADER_SUFFIX) {
            let byte = self.read_byte()?.ok_or_else(|| {
                GraphError::BadHeader(String::from_utf8_lossy(&header).into_owned())
            })?;
            header.push(byte);
            if header.len() > MAX_HEADER_LEN {
                return Err(GraphError::BadHeader(String::from_utf8_lossy(&header).into_owned()));
            }
        }
        let text = String::from_utf8_lossy(&header).into_owned();
        let options = text[HEADER_PREFIX.len()..text.len() - HEADER_SUFFIX.len()].trim();
        self.endian = match options {
            "" | "le" => Endian::Little,
            "be" => Endian::Big,
            _ => return Err(GraphError::BadHeader(text)),
        };
        debug!("planar_code header, byte order {:?}", self.endian);
        Ok(true)
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pushback.pop_front() {
            return Ok(Some(byte));
        }
        let mut buf = [0u8; 1];
        match self.reader.read_exact(&mut buf) {
            Ok(()) => Ok(Some(buf[0])),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn read_word(&mut self) -> io::Result<Option<u16>> {
        let buf = match (self.read_byte()?, self.read_byte()?) {
            (Some(first), Some(second)) => [first, second],
            _ => return Ok(None),
        };
        Ok(Some(match self.endian {
            Endian::Little => u16::from_le_bytes(buf),
            Endian::Big => u16::from_be_bytes(buf),
        }))
    }

    /// Read one graph's rotations, or None at a clean end of stream
    fn read_rotations(&mut self, id: usize) -> Result<Option<Vec<Vec<usize>>>, GraphError> {
        let first = match self.read_byte()? {
            Some(b) => b,
            None => return Ok(None),
        };
        let truncated = || GraphError::Truncated { graph: id };

        let wide = first == 0;
        let n = if wide {
            self.read_word()?.ok_or_else(truncated)? as usize
        } else {
            first as usize
        };

        let mut rotations = Vec::with_capacity(n);
        for _ in 0..n {
            let mut neighbors = Vec::with_capacity(3);
            loop {
                let entry = if wide {
                    self.read_word()?.map(usize::from)
                } else {
                    self.read_byte()?.map(usize::from)
                };
                match entry.ok_or_else(truncated)? {
                    0 => break,
                    // out-of-range entries surface from Fullerene::from_embedding
                    u => neighbors.push(u - 1),
                }
            }
            rotations.push(neighbors);
        }
        Ok(Some(rotations))
    }

    fn next_graph(&mut self) -> Result<Option<Fullerene>, GraphError> {
        while self.read_header()? {}
        let id = self.next_id;
        match self.read_rotations(id)? {
            Some(rotations) => {
                self.next_id += 1;
                Ok(Some(Fullerene::from_embedding(id, &rotations)?))
            }
            None => Ok(None),
        }
    }
}

impl<R: BufRead> Iterator for PlanarCodeReader<R> {
    type Item = Result<Fullerene, GraphError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_graph().transpose();
        if !matches!(result, Some(Ok(_))) {
            self.done = true;
        }
        result
    }
}

/// Encode rotations as a planar_code graph record (8-bit form)
#[cfg(test)]
pub fn encode_graph(rotations: &[Vec<usize>]) -> Vec<u8> {
    let mut out = vec![rotations.len() as u8];
    for neighbors in rotations {
        out.extend(neighbors.iter().map(|&u| (u + 1) as u8));
        out.push(0);
    }
    out
}
