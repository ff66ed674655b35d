#[cfg(test)]
pub mod fixtures {
    /// Six topic paragraphs, each long enough to become its own chunk.
    pub fn biology_notes() -> String {
        [
            "Photosynthesis is the process by which Plants convert sunlight, water and carbon dioxide \
             into glucose and oxygen. Chlorophyll inside the Chloroplast absorbs red and blue light \
             while reflecting green light, which is why leaves look green. The light reactions take \
             place in the thylakoid membranes and produce ATP and NADPH. The Calvin Cycle then fixes \
             carbon dioxide into sugar inside the stroma. Photosynthesis therefore links solar energy \
             to nearly every food chain on Earth.",
            "Cellular Respiration releases the energy stored in glucose. Glycolysis splits glucose \
             into pyruvate in the cytoplasm and yields a small amount of ATP. The Krebs Cycle runs in \
             the Mitochondria and strips electrons from carbon compounds. The electron transport \
             chain then pumps protons across the inner membrane, and ATP Synthase uses that gradient \
             to make most of the cell's ATP. Oxygen is the final electron acceptor, forming water as \
             a byproduct of Respiration.",
            "Mitosis is a type of cell division that produces two identical daughter cells. It \
             consists of four phases called Prophase, Metaphase, Anaphase and Telophase. During \
             Metaphase the chromosomes line up along the equator of the spindle. During Anaphase the \
             sister chromatids separate and move toward opposite poles. Cytokinesis follows and \
             divides the cytoplasm, completing the division. Mitosis supports growth, tissue repair \
             and asexual reproduction in many organisms.",
            "Meiosis is a specialised division that produces four genetically distinct gametes. \
             Homologous chromosomes pair up and exchange segments through Crossing Over during the \
             first division. Independent assortment shuffles maternal and paternal chromosomes into \
             different combinations. The second division separates sister chromatids much like \
             Mitosis does. Because each gamete carries half the chromosome number, Fertilization \
             restores the full set and keeps the species karyotype stable across generations.",
            "Enzymes are proteins that accelerate biochemical reactions without being consumed. \
             Each Enzyme has an active site whose shape matches a particular substrate, an idea \
             often described by the induced fit model. Temperature and acidity strongly affect \
             enzyme activity, and extreme conditions cause denaturation. Competitive inhibitors bind \
             the active site directly, while allosteric regulators bind elsewhere and change the \
             shape of the protein. Catalase, Amylase and Pepsin are classic textbook examples.",
            "Osmosis is the diffusion of water across a selectively permeable membrane. Water moves \
             from regions of low solute concentration toward regions of high solute concentration. \
             Animal cells placed in a hypotonic solution swell and may burst, while plant cells \
             become turgid because their rigid Cell Wall resists expansion. In a hypertonic solution \
             plant cells undergo plasmolysis as the membrane pulls away from the wall. Osmosis \
             explains how roots absorb water from the surrounding soil.",
        ]
        .join("\n\n")
    }

    /// A single sentence too short to chunk.
    pub fn one_liner() -> &'static str {
        "Enzymes speed up chemical reactions."
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::chunker::Chunker;

    #[test]
    fn test_biology_notes_chunk_per_paragraph() {
        let chunks = Chunker::default().chunk(&biology_notes());
        assert_eq!(chunks.len(), 6);
    }

    #[test]
    fn test_one_liner_does_not_chunk() {
        assert!(Chunker::default().chunk(one_liner()).is_empty());
    }
}
