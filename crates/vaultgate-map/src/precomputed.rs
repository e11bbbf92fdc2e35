//! Precomputed constants for the sparse commitment map.
//!
//! This module contains precomputed empty node hashes for every height of
//! the map, so untouched subtrees never have to be hashed.

use hex_literal::hex;

/// 256-bit hash type.
pub type H256 = [u8; 32];

/// Size of a hash in bytes (SHA256).
pub const HASH_SIZE: usize = 32;

/// Height of the map. One level per key bit, so every key has its own leaf.
pub const TREE_DEPTH: usize = 256;

/// Precomputed empty nodes at each height.
///
/// - Height 0: Hash of the empty leaf value (32 zero bytes)
/// - Height N: Hash of (N - 1, empty_node[N-1], empty_node[N-1])
///
/// `EMPTY_NODES[TREE_DEPTH]` is the root of the empty map.
pub const EMPTY_NODES: [H256; TREE_DEPTH + 1] = [
    hex!("66687aadf862bd776c8fc18b8e9f8e20089714856ee233b3902a591d0d5f2925"),
    hex!("4b1be8ab72e693f0e54ff2e50dce5047c80a792902004bd5a64845e1acc6fdd5"),
    hex!("bb9a780d646a95fb1e7e2f860510103d30f00d85a9bb887771655ec655515952"),
    hex!("ae135981ded763c799b42a947af2ed70dc488b731cbf894f5889731214ef4a8c"),
    hex!("aae7bbef350733ae4ac91297053afcd78feb6a67e49703064d1c10e6a4531936"),
    hex!("83f7c5a64da5369a69b5139eb85f367e1634e128af3f7880dd12068f7426cb56"),
    hex!("c9a5310fecec1b57ee110238a44c64e4814183d187cc9041ed89212400e95f60"),
    hex!("f90ff2924cd847c361a501e9a5232ae8770dba28e0e86541a530a0f4abe02297"),
    hex!("0d88347eff11f53c903148f8be9f32075c487876a204794c7df76265f28ef836"),
    hex!("8316a934caf9b6bfb087f48261745e507a1e30dcfcced9a6459c2e966ade4b24"),
    hex!("ecd72eb7de8048cb9c1b26f883165cd415a77984c6720f3c1d9549967a9b8e09"),
    hex!("280f05e2d835d21acc59d828e6874887203611dd2f0fc11015c00691042ec6e6"),
    hex!("6f2088c35446b1412c467f6db493cfaf74170862ae312825f6bd656a326adaae"),
    hex!("287cb8b0e053a4363f4b6399254ebf57c880e37336c7ea6bb17028ff41056faa"),
    hex!("6b2949ddde0de680c74f1e3eb57f0110b6fca2af572fc869130ae2017ecd42f0"),
    hex!("a24de877aea37867a94d4c3ce42b0efca0f360fcf16619bb6da4662ea8f2bb78"),
    hex!("00ecf43f19cf3172fbceb6f98e5972eee01819b6d5f49a4d2724f4d4de24238b"),
    hex!("9ab143b6b1dbb464c21f94c1dcfc9c2be0a1b43ead64055e0ff9b120873db0fc"),
    hex!("3e6561d8a1a1632cf1b75d9c19b96fd8d10be1d98fb15a7d1d328c7d68a9134c"),
    hex!("43a6c3f47ca0da180133702a7a2bede71d355bb94c1864e740b64167dd676465"),
    hex!("50e58e4d8ab89dc2915850fb771bd0c882e6469590f39b1dd2b0615e0aa28ab5"),
    hex!("069a919d581f191be98a3fad0f6d438d2e9a186236a8368ac1b7ae52dd3751e8"),
    hex!("771f66eaa425564af0e59cd951d238774098985b49336593ef15f393b1d303f4"),
    hex!("b455ad9959e16f0c78a7ea28906666eb01fa6df7f0c77702b56bb6e6467899e9"),
    hex!("9e386a244df5f79b350853b2226f1bc12532d8e74f38e3919bbd5f3e4a4c553e"),
    hex!("5ad17adf720337df3974ac3a236495b9900d9b352820b58de81e480b142379c2"),
    hex!("90781ce10444da72f5b030e5fa461db084b1be770753d263eb681a145aa2d6a2"),
    hex!("6e57ca05774c51ff947a3d6f11fa130379cb885986ab3f821bae308586dae82d"),
    hex!("60b289dfe3fa7746a9bf7ed9a221f7c0767997bd75eb021c9fa0ee103e5c6b45"),
    hex!("a5f52158302626c4b938d95fd3497c4e3edfb56a1385190704dfc731f4712df4"),
    hex!("be2d8963e88b76774241dae3a88c5bfac44a3177acec39b009c02ecac763b336"),
    hex!("8743799073658f77be643ba97820723c43139f6ebf9cbed93732910cb8296bec"),
    hex!("e6c420079e5b08ad9a0c9d2c7593cc65f7af059d2b8aa0f5ce201ead8b789a1a"),
    hex!("fda13e5240e90bee4bdd6f0d1f8b5f2d0f79193a50cd3e24c1f5ab0550b2a333"),
    hex!("48303dc545d607b2f8602e88cb8b97e8603a408a09a3a8459303e014d25defa6"),
    hex!("29131db2ddb347d9241f4a8d597c07ccb161a0977181fe721b08f60c16a25dad"),
    hex!("3d99d4ef155ca198a7550844f6b44d4c877ea1b00baec61e649f072dffcf4de8"),
    hex!("fcfdaa39f7eefb2ba6e47892d31128d9f881aadb19111832b57b86842e3ca544"),
    hex!("325fa2a280dc0d72bc8bdb62e272bfe7aeb1d6e1ff6014b28fb8eefb2e2ac49b"),
    hex!("c7783855a9f24fb52aaf10e49a829695b3adc2247c8e42fd6a5566bf65118483"),
    hex!("19a4d2376f2fe19ddd9763e5ee1478643ee0d31744ce545f88f8a63868f2513b"),
    hex!("e3de83b39e2953fd887c08a760b95c367ba55ff8c9a91ccc21336c116aff4734"),
    hex!("bdcfe9988eb27ad41075bc1b68251823b59bbe6eac27bc9b794c331149ceddb3"),
    hex!("9b674191d4f6b56447b512b807fa0a80c1efa1f17b09a71fafa2d22f8e35bbd7"),
    hex!("847ddcfb15b00b691cf0166312a28e7ed31d0ad1adbf34e6714dd9c3eeda88bd"),
    hex!("2a679940f548dc1c5f6eb13f823eb14f0605fbe5983928b7a2eb147d585685d4"),
    hex!("9287888468dd0cda7adbdaa5f6725d71bc7bcd9c968a769c9933eb0bb4dbf7d3"),
    hex!("b2dfe4b06bcec06ce8a86078e7a6789e615e72f513ca7002cce1748bbf094ed6"),
    hex!("4d9f593c0c7228520656b26cbeb5d644015e7f397598e339304ef30f2e4e04cc"),
    hex!("a87eab307e2ec853165010a066245019b41b436eb3fa9218f9e7b76769b19b89"),
    hex!("f789506147bfc45afc59b8c946caf499ab923dc09a53f208dc89fafdde8ea91d"),
    hex!("a1d679e12b1ec2ccd5dcdd725f1e4699d016838cc3eee9e052afeb1cb0f61044"),
    hex!("ebb52eae70d1b8129e7776d3e431b1437ec8b7e84e4827d7d1f1a26a18f1f3f1"),
    hex!("a19f558aab7f31ed2323b561d1def15f979fd30a6002be970c16d5ba78f5d518"),
    hex!("d47a83233b42f28921d03f05f3d09d44f1e13eedd7a1a16ddd9e3f1dca40af9b"),
    hex!("7844d031148d3bb8c3f90ff42ff9ef03185e6b470b67bf20a5fecf47a2bdfac5"),
    hex!("55ac35229a5fa0addc3c1800e458947bc2dbf8ccf86703e87422c48ea5b0c7b8"),
    hex!("5f9f5a4d1cdca42ca58309a18ee061b69f3102821aafef64279da040f0a765fc"),
    hex!("c6f44cd99c8e5c2a506a2f2656a1f8523ea6c788ec8a6693b106937c75af78c2"),
    hex!("010dfd29e16a01080d46c890e2dae9c05216801fce618007db908e2e9ed2ab13"),
    hex!("a3f70c845797145dd7b01437cb8e17290da5186aca5556f06ab83b500a2b0a31"),
    hex!("e90bd120db8ce94044e2e632906c2a376a611e173cb02a8985eef1c1d7991bc6"),
    hex!("06dabb1d4f7c2dc7c1aee6679af8ac9a4f49101d3cafe18fe210a72068975754"),
    hex!("309071515ffd7d18289fd376ff89c6af8247ff3d0b2d24f02902dd03cc134389"),
    hex!("4b1cf5b4b12a0de292d936332f1f070ff59c9bfe4bb15ea7aa9b1cabd4cbe5dd"),
    hex!("7281d6b167f6e974f0231a4a87e00b00d21185a364884f33ad5d4772c08a62df"),
    hex!("bef570413cc64204b866a362376fda83f35aee33e6666fb0e60c8ee92dee4069"),
    hex!("ff6a2106a18feb33ad113a0c21d822842ccdc4a4c17f60ae0716d4e181882ace"),
    hex!("04c654b51cf62c928ac36fb4774782cce7e59ddbbf97f1eb2c29f463b5e14507"),
    hex!("34c9ab37a9cc51aa90d6f4d5a63ceb9dcf0b443ebfc7cc8fd07c74e6db042cdd"),
    hex!("02ee578d389562043209688e3cd005e014bf737fdcdc5d8f647faa0a15a75e93"),
    hex!("7e45b52faf4d9c1b1245cc8b908e39e1a720c08d7805b4b38362aa54f4c30fea"),
    hex!("41f34b96dd6cd209c09ec05bf37e0734b672a0ec37ec5a936cfcf06184d0a6f1"),
    hex!("ac29c71a407f1f530e13dbaf666c6fb2867adcc9427d4212f03801a31a122941"),
    hex!("b588e1071d514d5a9138ddf131b8462639b133e809f2476f93cca6c6683360cc"),
    hex!("78715d7a45e9b9207dbdc186b849d472ba4ba4171f89dbdd64668714e7b3bdfb"),
    hex!("911264ce9b3af6b93a2f52e249c60a45ce706d58921649ba5ce18950e5325d08"),
    hex!("dbeb934e681a0238d8679ad7ce1a7700b61b47ee7f01b02a2ef0a1551144a29d"),
    hex!("e66427ac3cd12e7135620ef844511ea7e2be9e9bc83cf6483445119febe68acd"),
    hex!("252716269809965cebd6f25027107e506759ff4ea221b42e04f9bc0af20570cb"),
    hex!("480d7e38f999934863206bf5be8dc220a8d8104dc2b57bc9e75ff7ffe8a82716"),
    hex!("236afcefaa3a078bf2885f2c718f035b46fa88644ccd8e4772712a2b3799289d"),
    hex!("da2f6f1db9b1b267a9d49a87860e9890d4d8726ce4592c972b2e7af6775df75a"),
    hex!("432f557b6575a9b3f910bbed64f9cc6781bb7cdac6b4de495800671bf32b9189"),
    hex!("8825f55bc37363be42758ef5b0ebe86f4c106201bc8cb0f9568ccd75657194de"),
    hex!("ea71a9155362dc5c06dcab714c24dbc7d02e9893066023859947ea957c9852ae"),
    hex!("4a57118c2d3279598c0c38cfcd4bf453bd11e11d5a5ce2da3f12f8fcfcaf9f64"),
    hex!("1814e791853f21f300f3a29127a0436b23750dae1c2b966143efb013b79831cc"),
    hex!("55fa67f101ba698023b90aed7ebc02a1c7ca2a9c47573ac9bfab8511a53615ff"),
    hex!("74407bd763448236bea5bcb5e0374a6c0a0bc1cd1b6c6902b98f9e54f6a09a71"),
    hex!("a9a69588ab56bf8382abb96f4e8aa81b3e471e8ae42fb61216446aafb84d4dc3"),
    hex!("11372e9e7ada2e9be280dafeec2243e64505292d2636303d98d60b9f7a895ef3"),
    hex!("ed4f603d80051009715a615a8de9db6f7650b5e2de1fc501b140348da1b9ca99"),
    hex!("17add5338c6177e4387e4e35b1e0cdb53c8fc26d78d7c8f02d6d3a51ad14e65a"),
    hex!("e8b439d3557b0f7282bf6d031946c054e48799980845007c485b1131cb8bd819"),
    hex!("7a4983d75fb332a9636bf2d7bb0df39b0e9cbff9e27ec922d8cec61a6a05d96a"),
    hex!("d91771b3847b56e87a76ec23f67febd158633e461f302dd352ee8f4750a7f988"),
    hex!("181496d4b2a527a2e1c2a084c73ee1669d0204160b5b96e12f70248dad3ef94b"),
    hex!("85c7312db6d3c8023e7ae5628d78d05ef3c00c63c5f3e5847a4a3e32840f7ea9"),
    hex!("377a6f7fab1f5c1fadcffc551c5de5f224b2e69274fbf8386f71f4bf57001137"),
    hex!("64ce9df37db204f7ffcaa71313be4991ddf2707d3092788ddd3e68223ce17ad1"),
    hex!("fe77feb9721314e1f4bf08d7357ac258c4005118e1a271d5c5891df4b9bce964"),
    hex!("fd76bd70c8a655a1ee5be3c4cc89eb99d1ffb0a3eaf6ff15e49e1216dd92addd"),
    hex!("62f3dd1986fdc5bf91f056b910f6e9f89732f8cfb13bf9b006b2569400d56e46"),
    hex!("fdf36f5d02ae37e5382da2ab233c684ab431e522dc59587a7f48ac738671d9b7"),
    hex!("ee999998e127ac2b9a89faa7e7cb8f7732b236b2494e6d5ba02639d83379a032"),
    hex!("4073e17c907772ab936cbb6939b86059da70363ff8b25b1658da5bc242f2e33f"),
    hex!("6124d1ff7d5053fd5375a2cb9111a4bde95fe951e3ada6573de9cadeb45c54be"),
    hex!("8f033fb27a143717bce800374c77969f71c6b33714b626d9914fbc105b2a0c47"),
    hex!("ae8ffc100628148eb52df06ac5ec49e66d12c6ccb4b5b09dcdd868bf9f0a2eb9"),
    hex!("946bb78641f5c2955c198994a5d996c5550b32e965a877c79ab28fb4617fc1d9"),
    hex!("fe2aaa950b115a43818860d340cc3e4d6511b2ef1f9fcccae7ee8af01ca62736"),
    hex!("24802eedaff514f96b983aaefa1e9398f2d8a482d7b9cd6c18a776b6402e6bad"),
    hex!("4b12b827a3edfd8d219b6deb528cd8161455f202fad01856200954a0f10f327e"),
    hex!("aaf1556a4c592ebb1ed6de4d70eb8000657cb95a41b429c6dd076f98f2aea845"),
    hex!("db6bae8f82adcd1dd99a1bb6a9a58e5e19248cee23443c008d61be33d1f8b5da"),
    hex!("d13c3f21020d04d9ea77ae81d54072fb89c880c3b2f24bcba280c8ff4ca8cb21"),
    hex!("b503484e5d3e97b063a23aad90c1915669b3719cd528b04585d5356d24fd4b99"),
    hex!("b55574cfd81e404fa150580857ed1abe5deffd88a309c547fbfb4fe9aa842f23"),
    hex!("7b1973098876e5b50eb5c2437539c52c885ea0329bd457c5a11ef58159352945"),
    hex!("1df167fa0132066a8d95ac61fa52115d1cf0a36782a5c70402701e2da8ac7d54"),
    hex!("f4082462f0d816108ad7cf131b200d60ce7924329555be9ec8ad6ad7202ca457"),
    hex!("af2b4b5039bf4932cb2ce4ba2e60d6baff71381aa88dbeea0b1b9eaa723e3a3c"),
    hex!("5f63c9d7655f29dbdb92242127375cbf68b1ac814078f05a6afcf9eac55e3851"),
    hex!("7a806c41c30bbb2c72c46d151db7575fbe276261579cde0031e24d4c3004fe6f"),
    hex!("598ebbf4c9ee74c894a97489d954680b3098ec3e614ae4ef8cba2e6226a07eb1"),
    hex!("648ec784097d51de46d7cb0a1cc5313b89dd449e7fd7bbe92bf12dee8bac5d97"),
    hex!("f49743c73c5f9864e521a3cd982f2160482e98831b95f6507ac792bc9fdd3122"),
    hex!("d005077556091215a58aadabab329473f6dfbd042e702f588c76f1e81111848a"),
    hex!("737f28b6128d4fc7aab233b06f0c266f23e064782cd56228f49b85afd1fab166"),
    hex!("a970e4b9e2dbb4f5c4ded29dd79a276fa25d598d938af271e8cd0b3dbdfda44e"),
    hex!("ade0dbff282564164f208e8df2ce6190b0854a0e846a67cb289fd72587bad9b6"),
    hex!("759c70f9a994fac8ff98997ae063a8a7c3a25b817145bde8218e5d4612abaa5c"),
    hex!("c225ded5f21d84bd1e66347068a2e265bc4274d0c8b520833170d89f7210c9f6"),
    hex!("cfafc3675dff0700f5c1a8b876766ec2e199feb33ea8acb0def4ad6fe464550d"),
    hex!("2982151b103b13fcc42c036451ebc1b593d25268ed72f9bf3ddc89e6f4387185"),
    hex!("bc69ded57d61e90cde9ff8b8daaacd3569d3f37d6730d67d7374be55c813fff8"),
    hex!("5df3b4503687ddd27f749088446eea6aa40d2951a5573d5a641dddbb97eb8039"),
    hex!("c82686c58ab0566d3fc27531f19b993660531afb02de5dfc40df95eadf4ab3ac"),
    hex!("7b269c6ee25494e40e6350323eb4cfd7de97865d740360f333136d4460d5e557"),
    hex!("f6797668e753182d1d1f5fabff728619b3e87119a2a69578d3a7b1c2303d18aa"),
    hex!("84c82ebe532dcca47d05249db9dcc2253510de8f8e5b1f7b55db766a076b8429"),
    hex!("c55991820d830728354bdeee5d38051424f30e2f817eed35adf93ca475828c08"),
    hex!("3b6800ff9295ec4a15fa870c83651d6a2fcbc055ee4c3fe2e7416cabd9a2663c"),
    hex!("3b5466d95bdad85c77105b1c2b4bc268d81f11c13adfea3eff72901fe6dae0cc"),
    hex!("b17d0574e250c5bc048b4db5fee5b708a9191bc577bf8a64d25169af096141e2"),
    hex!("b41f8aaa8ff66c3f54ebbf22d4e638840042339fe3471a78b705ab7478e099da"),
    hex!("760056339aeba60660a506545513375bb817537d447838ffb6afa6b5f2cf9368"),
    hex!("1cfa528c8bedab85369cfec75552cba79b6f2582b0836cc52afd5e489449acd6"),
    hex!("eb7a34074a59ebab3adbf50cc1ae32afd550ca727b9cd5a9a1b7a966e8b20db0"),
    hex!("55a3911ca70223b8d7fd1328c98e919e2ae0f231bd4061c31c3fc7f75f49c9dd"),
    hex!("7d497ca029b2aeb656f2cfac7ddae001ba04776efbbb8149386381c456474114"),
    hex!("94f3d4fabd14510ad32393e13edb054f1707c44f0eafd6c073b81abedecce215"),
    hex!("1fb746d5896b5e45bc1e4225369f117cf57dac3b61e879a6e1f38c6fac1ba7a1"),
    hex!("306eca1fef7698204ced8a35745f05f7a7a78a61ea81740a84753bbcdb04edc6"),
    hex!("912c66be29731f4fbed2f9edca502dba44e02919f0d8036222d613019c384603"),
    hex!("60edd1683486afa17da6284ebb54c6cf62701519b621dd1a4c867ba58e4fb471"),
    hex!("35c124c9b4e2946391d896c8897b4cdae78460c34cf7dea3be272543cf46d137"),
    hex!("6c334aaa7d3af7021a06d634b2b274acad93d403402531147a4a9ec99698a2ac"),
    hex!("e8e6145c635a5e8cae53e86a5f7299dad43b5583fa5c96f4ab0302d34b6dd093"),
    hex!("5c184f4d9eb9d7d3d6db8af466d1d52f1d8645fa8f8b545e18d5884855efe7cd"),
    hex!("794276a3c38e889317b731add0cf14bc37d53559bec199b61c55bee842675d42"),
    hex!("11dee134c874c146cb9774657ec856de8bcfccd81f0698a42b5b80bd17eea3d1"),
    hex!("c5dbf437d9637e318fa687f22247fd8cf89e6080921b9e0335088308ff01264a"),
    hex!("840c572464b63381f33f4930b07d9ca837f538904e236b8a2c6bbb373d764c73"),
    hex!("ef3ecdf36749ed8a029d8130861af732d5ff54ab784dc597f098f396a0d21eb2"),
    hex!("3f876ae15060453d8ce3f9f1bb873f3be0632fda0449fa5dae527a5a34b2cd9c"),
    hex!("9f424d4491fac3e58d1953aa421972aa249714640a1b4de8e3756aef6d02f0d5"),
    hex!("b49c3f69ccb5fae91d59dc467e3128969d7fa61b55a597e3fc9d432ea20ba217"),
    hex!("893888db1a6554ffd892ac3e3ebad891cd0536724c4eeddb5c5eb0903c139a83"),
    hex!("8650e616dce0870721080e7f142cd04cab617801e31827f930db535b673b2186"),
    hex!("9dbaebd03a3fff48d533bcdf4773d03821b473ab4cacf925f9620b15e00222c3"),
    hex!("9678d8d559f810c3eb61096e7bfac8ee20fd8c72bcef843f4e8b6ee4c4ee20a9"),
    hex!("8a9af58dc01ea2fa96a14eea281a83cf19cd8f0451339b86692a70c453b25850"),
    hex!("1cfabf0b4c4d5366bb8b02f0eeb7717fced7942931eea070c11cd1cc0dbc51a7"),
    hex!("7db2c59e43116f1d073a6331ea6d809d2a9f59800f9f9c61c17e5736232330d6"),
    hex!("1fcbc65a76a7be927c9079ea6e57bddbcc9e1dba34e944c2f740304663b63fdb"),
    hex!("e676d36134dc2bdd2fbb24ad61715651ec013e04931bd0ceaa3963f1e5394084"),
    hex!("cc86a2b5c28fb643697cabbc47dc8d32d05a67b1553a97978b8fc51a97f5700b"),
    hex!("c7e50d1e25c5cca15a9f0376deb31f412a69b57e40f4d1f1ab61bc92d5d1c4ef"),
    hex!("4708f6eebcad7c1b132bb68c4956caa80c7e2d2732edbbed4d5637848c7177eb"),
    hex!("dd29a9ff710ef577d18553903aa7d109b50a84f72a0fad8ec983113615eb424c"),
    hex!("4571005b7432b11f026ad56ea52d1965035ab34d4541125df7a87b56900f217a"),
    hex!("50ebedb2d0e81280a8123a5ef3ef2755ec2cbcadb2e8e2a3a4aa61ca9a5c3771"),
    hex!("96356d7ebc90f49123a93a721b1fb98bc5f842ecf5912a9224702aaeceb67fd1"),
    hex!("77c770ae847fbb67d021f0cd67db2e9165f6db86614c86564cd14b0e7920fb0c"),
    hex!("54a84eb5dadfeb16c55f2d07cfed9c91686447ac00b569e5e832f2a00960d8de"),
    hex!("cc9dd1979016dd4ae975afcfd3f944a7a072951d114ec5ab63af350aeebd22e1"),
    hex!("2958ce902aef73b9fde6f7f4da25ae51658af8f4b2670814e818adebd4763497"),
    hex!("b8b8f9af10e6525d4e70a574a0a5771aa73609ca74b37440aa8cbe0bdcfdb6e8"),
    hex!("1bf4ae5eef45210a8ecdf4b7c79e77ead3b273f70409de9b2d3b442a4a3ee4d2"),
    hex!("8d5efe1ad992464787769870d07e03c38c3cf035f74710cc14670d4c585a8d79"),
    hex!("efc46a38c9bb3b5d9a6cf75755af07dfb6d02d5994039a415f7565ad85a5c727"),
    hex!("a99db92d345fcb3ec0fdf156baed36efaa79b7a37f10a5bae8c6ad5858de8d3a"),
    hex!("cbf233fee4f687d9465dbc439dadcc6919f6c04e090af919a78e3c93e0e4397a"),
    hex!("9661ff62984c3a7d98e99aa599958641124990f265bc26a0010ba5651b0e69a1"),
    hex!("c25d2cc62d8ac75984684f90f1eadeb9263653ec814b9886045760212007d7d9"),
    hex!("a0bd88e690cf9ddda58ce0f0357e99c21a857d6f4cc5ff36b29fbe3fe0261cbb"),
    hex!("6e70c4a357f803a20bf436b14b0b0398fb4a89fd84b358e7f373d36ca079d544"),
    hex!("0d33d74bbe53de4994e5201077389128d50dfaafaed5d5411ffcae16a97442ec"),
    hex!("bf084b40368a73e9d885788c30e0c23e3d3abeaee09157830aea85593a9c7349"),
    hex!("095980f7a2558d67aac507aebd3cab5e942be763d015715c8e3f903d375dfe05"),
    hex!("c29d02e263c7dd2f7a08029e3b89790bbc752e52b8810b11375d38c088de5817"),
    hex!("d75634d6d876b38dc2d2c3790ffaa135334242f293da3bc885b71fff80b0c454"),
    hex!("3da0e0a3eba3be86b16715aaeff1953a42ba91453430dae7e2a800f24e15d835"),
    hex!("268ef62a484f815e5d08405e3142671ccc7ad533f6da192b2591519b7e649862"),
    hex!("76443d42560e95379e4d2e29436e16d8868a95a78203ee264fefa209feea948b"),
    hex!("ed64af09f2c27b6571e01db19fda239a0d0e1a5663ee18615fc0bd7fc353f192"),
    hex!("c24d435749aba0663b117d8a3d0fccdb077ac66a62c3185708996e7139bbe421"),
    hex!("a2c8223fd192f9a590e1773ebdeb7b8c2ae053d943d1899e6df89d23d14b3556"),
    hex!("6283428692777bad3a693b27c5a134cc084fd6c823d43a9c5bb59e18a653541e"),
    hex!("807eef4ef4758090e089f44365e4824b8264ff9fa4441f4bbcfe4ca32e279346"),
    hex!("cd7d83c181c74775a4b9bfe1cacdc640006985511e70b5c40a6a501c7679d12f"),
    hex!("5389651fab31984bc75fc5c64536a3f6010be291ef1e9abaeb1043f42de2e559"),
    hex!("83d327142e94ed34f47624d59a78ccd2213ade052d20ea8af222297cb6c1a42d"),
    hex!("675b227910f86edcc44aaf4a9b94ccf7549b30674da6355cb1cc8ee97b904d98"),
    hex!("b9befd84f0a13f7f6afe7c78e9a04b3eff3e632802cb3c6d0665774542d99bfb"),
    hex!("30d72e17625106ff06d44200e3156fd82af72fab406e5443e6cd1ec98f6d31ac"),
    hex!("40e4f32d293292e66f9ac1f9498150f14f98753c18bae2032ee6a9d48623728d"),
    hex!("ac5f878b393e325a5c5ccf71b1270ed839cb0ce42641a59fe29e01f91cc5c65e"),
    hex!("d579cf3f0e92d726ff895cb9a9b979eec04eceb8e0b140112701e3711a8eaf6a"),
    hex!("03518e33bd7e5de01cbcb8b894f0a62f65078df81155f8b6590bfdca3a7ae6ea"),
    hex!("ebac19c5ca9c251779a0108e653a3cc8c4059769d9d0e238ab949d5a907f444d"),
    hex!("62c9038f7e6bdd017a5c00b0a48db2f0f437c737fb7424d14c49bff7facb09b1"),
    hex!("e6a6d140316d9ecdfaae148820ee6c7754a94ca060ff3aa2f3e0d8ef6cc06638"),
    hex!("b0f2dbfa5b2c0239fd19c5bab46358aa35b8746ae57a2e8f47b2bac633cd39de"),
    hex!("ca84602694e45a8e6f29dc1295d77445117ac50c4c4b44fa5ad4492a53e8f7ec"),
    hex!("08d4aa06f4c88997319a2df4fff20012bd48a5fad56875d0ccbb04cae7f8e051"),
    hex!("dbb4af5a0f08341eac2af78643e1b9b5c0ff63fdee63e00e0f2ee50f97520ec7"),
    hex!("e3e649072b9e62d21554706a57d77bc83c01a72e75b28b45673f616820b701da"),
    hex!("f7dbbade5d9f0beb0f0d2d956a7344f38990ba30b50354808c5d7a9bea0f47e2"),
    hex!("b89a1d08f19aba8400918d818f3039c84bf13c56be81d17907d016298d2935e7"),
    hex!("ae4be5f9262f679f4fd977f9969193a08e08aa18dcf922fdfcff374759ac6032"),
    hex!("18b52b968c9febedc8133042e2e055de0de2ea44a0b80b55cacef4b7cbac3975"),
    hex!("1ccc2fa62bb6bfdcab85beb8cf8e8cfb09e87402291d4a608c7eae66b435948d"),
    hex!("311de04692204279c3c2ecbbd5e108ee3b8832780986dfdb5559eeac8b3fc355"),
    hex!("8ba99362f1e976594aa200de236deb83245b05fea420ea9bff04a40d2e501cac"),
    hex!("18d86b0cc8dabe7b372c5d7283e87070f5649e81ed082efb93f40e99e73124f9"),
    hex!("ed41661b57715211407996225f0722ad1d9a0d0857cdfeb07feb611c10be425f"),
    hex!("9c5393d7f0476bef6854d14dbc1ea9f5b473171acb538b637613d2c70d29719f"),
    hex!("fa711b02db9e14f725066d391bde1df2989db8a01de09b98c968562aabffef47"),
    hex!("7f09a86a26851b277ba52176bf0bdc23a06d082706952c4a043203f9e5865090"),
    hex!("6c47e419bb1c649c80d1e45c88a149440ce59d503686a9a8c8bac445eed56fe6"),
    hex!("d5343d47b82781fed9f51485d51c8066d88470de5ebb87c006d91eabf4188509"),
    hex!("dc1c27498779d01ec3b8311acedc24de614618510a7359b820d29f336f187c58"),
    hex!("a49950607af18dc690c61562d120e3f0659090a4653b94675a5993ad11e09e14"),
    hex!("b3c831373ef2c72260a7bf2784ff19cf3cef76c6f205542e17d33187b34822e1"),
    hex!("98b0f320679af09309cf8f7db208157f208f952ef1732f09b5edac5a84fffcbc"),
    hex!("e84b12bf26c52fd6d8313d41ec6198666412d5cd237265198fb43dffd42ca216"),
    hex!("26fd49499566e4925510f98fb0145ff3361b0dd4074759cb36bbdfc26bf952c3"),
    hex!("34a6a3de253e6687e851829f7d75edf5b3ff696397c5ee890102872c13d3c94a"),
    hex!("d892fd1e60f758c04b404df302f5aa475c88986b376c3deedddef42689f137f6"),
    hex!("989ba7e0287068c868b418427762fbdb19f1b0c37a59f5f910d349d2e5e769bd"),
    hex!("cbbbb00aca7ae390e008fb8229b5e46ae5f94eaba130f839d6a07ef47e03b9de"),
    hex!("66d893980fbe641af1bc5e0855ef04634314631eed667d62adb7f86f9c5e2690"),
    hex!("35e524a2187e374e976d6ae30db5dee9960d60557e2bf6e75c1aeb4b4b7cd5da"),
    hex!("edb39d023930f7f33ca06281879416b05397695d711db84e35597d832dfff8c8"),
];
