pub mod stage1_normalize;
pub mod stage2_scores;
pub mod stage3_rank;
pub mod stage4_profile;
