pub mod genbank;
pub mod gtf;
pub mod per_fragment;
pub mod per_ncrna;
