//! Compiled-in address-prefix ranges.
//!
//! Each entry is `(start, end, label)` with `end` inclusive, keyed on the four bytes that follow
//! `OP_DUP OP_HASH160 <len>` in a pay-to-pubkey-hash script, read big-endian. Entries are sorted
//! by start and pairwise disjoint; `PrefixTable::validate` and the tests hold the table to that.

pub(crate) const BUILTIN_PREFIXES: [(u32, u32, &str); 171] = [
    (0x0330_526b, 0x0330_526b, "MasterPay1"),
    (0x06a2_ea6c, 0x06a2_ea6c, "MasterPay2"),
    (0x0d12_ad65, 0x0d12_ad65, "MasterPay3"),
    (0x0e4b_8dec, 0x0e4b_8dec, "MasterPay4"),
    (0x108a_5e8d, 0x108a_5e8d, "MasterPay5"),
    (0x1198_ca21, 0x1198_ca21, "MasterPay6"),
    (0x1210_6caf, 0x1210_6caf, "MasterPay7"),
    (0x1225_7011, 0x1225_7011, "MasterPay8"),
    (0x1291_405a, 0x1291_405a, "MasterPay9"),
    (0x13b2_a377, 0x13b2_a377, "MasterPay10"),
    (0x1577_0e86, 0x1577_0e86, "MasterPay11"),
    (0x17ac_1fde, 0x17ac_1fde, "MasterPay12"),
    (0x187d_2afd, 0x187d_2afd, "MasterPay13"),
    (0x1993_672e, 0x1993_672e, "MasterPay14"),
    (0x1b25_1763, 0x1b25_1763, "MasterPay15"),
    (0x1b5d_3091, 0x1b5d_3091, "MasterPay16"),
    (0x1c1a_4893, 0x1c1a_4893, "MasterPay17"),
    (0x1f46_bddd, 0x1f46_bddd, "MasterPay18"),
    (0x1f7e_5338, 0x1f7e_5338, "MasterPay19"),
    (0x202a_66c5, 0x202a_66c5, "MasterPay20"),
    (0x2089_e89c, 0x2089_e89c, "MasterPay21"),
    (0x20ba_cc63, 0x20ba_cc63, "MasterPay22"),
    (0x22c9_7a99, 0x22c9_7a99, "MasterPay23"),
    (0x2350_04d4, 0x2350_04d4, "MasterPay24"),
    (0x28b2_237e, 0x28b2_237e, "MasterPay25"),
    (0x29fa_c466, 0x29fa_c466, "MasterPay26"),
    (0x2a83_92c2, 0x2a83_92c2, "MasterPay27"),
    (0x2d07_428b, 0x2d07_428b, "MasterPay28"),
    (0x2e40_add8, 0x2e40_add8, "MasterPay29"),
    (0x2ec0_6c3a, 0x2ec0_6c3a, "MasterPay30"),
    (0x324c_1579, 0x324c_1579, "MasterPay31"),
    (0x3450_9f62, 0x3450_9f62, "MasterPay32"),
    (0x365b_f1dc, 0x365b_f1dc, "MasterPay33"),
    (0x3923_3b29, 0x3923_3b29, "MasterPay34"),
    (0x3974_5766, 0x3974_5766, "MasterPay35"),
    (0x3c02_3244, 0x3c02_3244, "MasterPay36"),
    (0x3d75_a65b, 0x3d75_a65b, "MasterPay37"),
    (0x3dd5_1e5c, 0x3dd5_1e5c, "MasterPay38"),
    (0x3fc7_abbc, 0x3fc7_abbc, "MasterPay39"),
    (0x401b_d758, 0x401b_d758, "MasterPay40"),
    (0x4073_36b9, 0x4073_36b9, "MasterPay41"),
    (0x4150_06ee, 0x4150_06ee, "MasterPay42"),
    (0x44f1_28b7, 0x44f1_28b7, "MasterPay43"),
    (0x4532_3323, 0x4532_3323, "MasterPay44"),
    (0x4592_d029, 0x4592_d029, "MasterPay45"),
    (0x463b_6a8b, 0x463b_6a8b, "MasterPay46"),
    (0x477f_539a, 0x477f_539a, "MasterPay47"),
    (0x48c3_ca52, 0x48c3_ca52, "MasterPay48"),
    (0x4933_1ccf, 0x4933_1ccf, "MasterPay49"),
    (0x4941_8baa, 0x4941_8baa, "MasterPay50"),
    (0x4942_6bc7, 0x4942_6bc7, "MasterPay51"),
    (0x495b_e4ba, 0x495b_e4ba, "MasterPay52"),
    (0x4a23_b907, 0x4a23_b907, "MasterPay53"),
    (0x4b65_3f55, 0x4b65_3f55, "MasterPay54"),
    (0x4cdd_2bb2, 0x4cdd_2bb2, "MasterPay55"),
    (0x4ce2_5347, 0x4ce2_5347, "MasterPay56"),
    (0x4cf6_4ea6, 0x4cf6_4ea6, "MasterPay57"),
    (0x4ef0_9a2c, 0x4ef0_9a2c, "MasterPay58"),
    (0x50df_90e7, 0x50df_90e7, "MasterPay59"),
    (0x51e6_b068, 0x51e6_b068, "MasterPay60"),
    (0x5260_49df, 0x5260_49df, "MasterPay61"),
    (0x526a_8571, 0x526a_8571, "MasterPay62"),
    (0x563f_9e31, 0x563f_9e31, "MasterPay63"),
    (0x5667_5e95, 0x5667_5e95, "MasterPay64"),
    (0x5698_da82, 0x5698_da82, "MasterPay65"),
    (0x5791_205a, 0x5791_205a, "MasterPay66"),
    (0x5867_138a, 0x5867_138a, "MasterPay67"),
    (0x5ccf_b020, 0x5ccf_b020, "MasterPay68"),
    (0x5ece_238c, 0x5ece_238c, "MasterPay69"),
    (0x621a_9140, 0x621a_9140, "MasterPay70"),
    (0x674c_0346, 0x674c_0346, "MasterPay71"),
    (0x68b1_b438, 0x68b1_b438, "MasterPay72"),
    (0x690e_e1f6, 0x690e_e1f6, "MasterPay73"),
    (0x691b_8135, 0x691b_8135, "MasterPay74"),
    (0x6981_ba15, 0x6981_ba15, "MasterPay75"),
    (0x6a05_7647, 0x6a05_7647, "MasterPay76"),
    (0x6a67_62fe, 0x6a67_62fe, "MasterPay77"),
    (0x6cef_c6f3, 0x6cef_c6f3, "MasterPay78"),
    (0x6d2a_38d8, 0x6d2a_38d8, "MasterPay79"),
    (0x6d50_c94b, 0x6d50_c94b, "MasterPay80"),
    (0x6df7_a16c, 0x6df7_a16c, "MasterPay81"),
    (0x7106_a81b, 0x7106_a81b, "MasterPay82"),
    (0x723a_0828, 0x723a_0828, "MasterPay83"),
    (0x74a5_484a, 0x74a5_484a, "MasterPay84"),
    (0x76c9_ba55, 0x76c9_ba55, "MasterPay85"),
    (0x77fa_9205, 0x77fa_9205, "MasterPay86"),
    (0x78fe_e177, 0x78fe_e177, "MasterPay87"),
    (0x7c01_6df1, 0x7c01_6df1, "MasterPay88"),
    (0x7c5e_e44f, 0x7c5e_e44f, "MasterPay89"),
    (0x7c9e_78b3, 0x7c9e_78b3, "MasterPay90"),
    (0x7cb6_e53b, 0x7cb6_e53b, "MasterPay91"),
    (0x7cb8_e220, 0x7cb8_e220, "MasterPay92"),
    (0x7ec9_d928, 0x7ec9_d928, "MasterPay93"),
    (0x8006_cd80, 0x8006_cd80, "MasterPay94"),
    (0x8143_3d17, 0x8143_3d17, "MasterPay95"),
    (0x85ef_0834, 0x85ef_0834, "MasterPay96"),
    (0x85fa_99a9, 0x85fa_99a9, "MasterPay97"),
    (0x872d_fdfd, 0x872d_fdfd, "MasterPay98"),
    (0x878a_3278, 0x878a_3278, "MasterPay99"),
    (0x87f1_3ca8, 0x87f1_3ca8, "MasterPay100"),
    (0x887a_5127, 0x887a_5127, "MasterPay101"),
    (0x8d04_f9a5, 0x8d04_f9a5, "MasterPay102"),
    (0x8d13_bbef, 0x8d13_bbef, "MasterPay103"),
    (0x8e25_49d7, 0x8e25_49d7, "MasterPay104"),
    (0x8e8f_74d3, 0x8e8f_74d3, "MasterPay105"),
    (0x9032_6bae, 0x9032_6bae, "MasterPay106"),
    (0x90f1_9f07, 0x90f1_9f07, "MasterPay107"),
    (0x923f_41e2, 0x923f_41e2, "MasterPay108"),
    (0x937c_9f3d, 0x937c_9f3d, "MasterPay109"),
    (0x93ef_d14e, 0x93ef_d14e, "MasterPay110"),
    (0x953e_d72c, 0x953e_d72c, "MasterPay111"),
    (0x9805_45e2, 0x9805_45e2, "MasterPay112"),
    (0x9924_d115, 0x9924_d115, "MasterPay113"),
    (0x9b02_0d2d, 0x9b02_0d2d, "MasterPay114"),
    (0x9b43_baf2, 0x9b43_baf2, "MasterPay115"),
    (0x9e35_7bab, 0x9e35_7bab, "MasterPay116"),
    (0x9e88_6df0, 0x9e88_6df0, "MasterPay117"),
    (0xa0d6_1e3d, 0xa0d6_1e3d, "MasterPay118"),
    (0xa11f_fd94, 0xa11f_fd94, "MasterPay119"),
    (0xa2b7_eb60, 0xa2b7_eb60, "MasterPay120"),
    (0xa4bb_6e54, 0xa4bb_6e54, "MasterPay121"),
    (0xa6c8_e188, 0xa6c8_e188, "MasterPay122"),
    (0xac31_7282, 0xac31_7282, "MasterPay123"),
    (0xadcd_abfc, 0xadcd_abfc, "MasterPay124"),
    (0xaf26_705b, 0xaf26_705b, "MasterPay125"),
    (0xb0e5_4ee1, 0xb0e5_4ee1, "MasterPay126"),
    (0xb30e_b8aa, 0xb30e_b8aa, "MasterPay127"),
    (0xb4ae_79e3, 0xb4ae_79e3, "MasterPay128"),
    (0xb4bc_d335, 0xb4bc_d335, "MasterPay129"),
    (0xb857_466b, 0xb857_466b, "MasterPay130"),
    (0xba5a_dcdd, 0xba5a_dcdd, "MasterPay131"),
    (0xbdd7_f5bc, 0xbdd7_f5bc, "MasterPay132"),
    (0xc033_ea44, 0xc033_ea44, "MasterPay133"),
    (0xc1a7_5045, 0xc1a7_5045, "MasterPay134"),
    (0xc2a5_2bf0, 0xc2a5_2bf0, "MasterPay135"),
    (0xc2c0_e9af, 0xc2c0_e9af, "MasterPay136"),
    (0xc62a_8daf, 0xc62a_8daf, "MasterPay137"),
    (0xc6b3_f7f9, 0xc6b3_f7f9, "MasterPay138"),
    (0xc74d_2a6e, 0xc74d_2a6e, "MasterPay139"),
    (0xc9c5_efe5, 0xc9c5_efe5, "MasterPay140"),
    (0xc9ca_7854, 0xc9ca_7854, "MasterPay141"),
    (0xca2c_5361, 0xca2c_5361, "MasterPay142"),
    (0xcce9_4612, 0xcce9_4612, "MasterPay143"),
    (0xceb6_4b18, 0xceb6_4b18, "MasterPay144"),
    (0xd099_a080, 0xd099_a080, "MasterPay145"),
    (0xd0a5_b263, 0xd0a5_b263, "MasterPay146"),
    (0xd2db_60a3, 0xd2db_60a3, "MasterPay147"),
    (0xd2e8_ae51, 0xd2e8_ae51, "MasterPay148"),
    (0xd2fe_d323, 0xd2fe_d323, "MasterPay149"),
    (0xd30d_c752, 0xd30d_c752, "MasterPay150"),
    (0xd471_c5cc, 0xd471_c5cc, "MasterPay151"),
    (0xd515_53d8, 0xd515_53d8, "MasterPay152"),
    (0xd92b_d374, 0xd92b_d374, "MasterPay153"),
    (0xdc26_f62b, 0xdc26_f62b, "MasterPay154"),
    (0xde27_0f32, 0xde27_0f32, "MasterPay155"),
    (0xdf64_13ac, 0xdf64_13ac, "MasterPay156"),
    (0xe425_6c9c, 0xe425_6c9c, "MasterPay157"),
    (0xe4b0_8c63, 0xe4b0_8c63, "MasterPay158"),
    (0xe579_bf8a, 0xe579_bf8a, "MasterPay159"),
    (0xe7f1_12e4, 0xe7f1_12e4, "MasterPay160"),
    (0xe8b3_a39b, 0xe8b3_a39b, "MasterPay161"),
    (0xe9f7_c805, 0xe9f7_c805, "MasterPay162"),
    (0xeaea_a3d4, 0xeaea_a3d4, "MasterPay163"),
    (0xedd1_2d96, 0xedd1_2d96, "MasterPay164"),
    (0xeff1_9ad8, 0xeff1_9ad8, "MasterPay165"),
    (0xf143_7acb, 0xf143_7acb, "MasterPay166"),
    (0xf1fc_6728, 0xf1fc_6728, "MasterPay167"),
    (0xf2a5_04d4, 0xf2a5_04d4, "MasterPay168"),
    (0xf474_2c36, 0xf474_2c36, "MasterPay169"),
    (0xf879_f631, 0xf879_f631, "MasterPay170"),
    (0xf887_8ccc, 0xf887_8ccc, "MasterPay171"),
];
