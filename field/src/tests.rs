
mod amount_tests {
    use super::*;

    #[test]
    fn create_and_format() {
        let a1 = Amount::mei(9527);
        let a2 = Amount::coin(9527, 248);
        let a3 = Amount::from("133188:246").unwrap();
        let a4 = Amount::from("1000.88   ").unwrap();
        let a3 = a3.sub_mode_u64(&Amount::mei(331)).unwrap();
        assert_eq!(a1.to_fin_string(), a2.to_fin_string());
        assert_eq!(a3.to_fin_string(), a4.to_fin_string());
    }

    #[test]
    fn add_sub() {
        let a1 = Amount::mei(1000);
        let a2 = Amount::mei(2000);
        let a3 = Amount::mei(3000);
        let a4 = a1.add_mode_u128(&a2).unwrap();
        let a5 = a1.add_mode_u64(&a2).unwrap();
        let a6 = a3.sub_mode_u128(&a1).unwrap();
        let a7 = a3.sub_mode_u128(&a4).unwrap();
        assert_eq!(a3.to_fin_string(), a4.to_fin_string());
        assert_eq!(a3.to_fin_string(), a5.to_fin_string());
        assert_eq!(a3.to_fin_string(), "3:251");
        assert_eq!(a6.to_fin_string(), a2.to_fin_string());
        assert_eq!(a7.to_fin_string(), "0:0");
    }

    #[test]
    fn sub_insufficient() {
        let a1 = Amount::mei(1000);
        let a2 = Amount::mei(2000);
        assert!(a1.sub_mode_u128(&a2).is_err());
    }

    #[test]
    fn compare_across_units() {
        let a1 = Amount::from("11111111111111111:201").unwrap();
        let a2 = Amount::from("111111111111112:202").unwrap();
        assert!(a1 > a2);
        assert!(a1 != a2);
        assert!(a2 < a1);
        let z1 = Amount::zero();
        assert!(z1 < a1);
        assert!(Amount::zero().equal(&Amount::zero()));
    }

    #[test]
    fn unit_view() {
        let a1 = Amount::mei(301);
        assert_eq!(a1.to_mei_u64(), Some(301));
        assert_eq!(a1.to_zhu_u64(), Some(301_0000_0000));
        // 301.5 HAC
        let a2 = Amount::coin(301500, 245);
        assert_eq!(a2.to_zhu_u64(), Some(301_5000_0000));
        assert_eq!(a2.to_mei_u64(), Some(301)); // floor view
    }

    #[test]
    fn unit_sub_burn() {
        let fee = Amount::mei(10);
        let keep = fee.unit_sub(1).unwrap(); // 1/10
        assert_eq!(keep.to_zhu_u64(), Some(1_0000_0000));
        let burn = fee.sub_mode_u64(&keep).unwrap();
        assert_eq!(burn.to_zhu_u64(), Some(9_0000_0000));
    }

    #[test]
    fn parse_serialize_roundtrip() {
        for s in ["1:248", "99999:240", "301500:245", "0:0", "-52:247"] {
            let a = Amount::from(s).unwrap();
            let buf = a.serialize();
            assert_eq!(buf.len(), a.size());
            let (b, sk) = Amount::create(&buf).unwrap();
            assert_eq!(sk, buf.len());
            assert!(a.equal(&b));
            assert_eq!(buf, b.serialize());
        }
    }

    #[test]
    fn parse_truncated() {
        let a = Amount::mei(123456);
        let buf = a.serialize();
        let mut b = Amount::default();
        assert!(b.parse(&buf[..buf.len()-1]).is_err());
        assert!(b.parse(&[]).is_err());
    }

    #[test]
    fn negative_flags() {
        let n = Amount::from("-52:247").unwrap();
        assert!(n.is_negative());
        assert!(!n.is_positive());
        assert!(n.not_zero());
        let p = Amount::from("52:247").unwrap();
        assert!(p.is_positive());
        assert!(!p.is_negative());
    }
}


mod uint_tests {
    use super::*;

    macro_rules! uint_roundtrip {
        ($ty: ty, $v: expr) => { {
            let u1 = <$ty>::from($v);
            let mut u1f = <$ty>::from(0);
            let sk = u1f.parse(&u1.serialize()).unwrap();
            assert_eq!(sk, <$ty>::SIZE);
            assert_eq!(u1, u1f);
        } }
    }

    #[test]
    fn roundtrips() {
        uint_roundtrip!(Uint1, 0);
        uint_roundtrip!(Uint1, 255);
        uint_roundtrip!(Uint2, 65535);
        uint_roundtrip!(Uint3, 256*256*256 - 1);
        uint_roundtrip!(Uint4, u32::MAX);
        uint_roundtrip!(Uint5, 256u64.pow(5) - 1);
        uint_roundtrip!(Uint8, u64::MAX);
    }

    #[test]
    fn max_constants() {
        assert_eq!(Uint3::MAX, (1u32 << 24) - 1);
        assert_eq!(Uint5::MAX, (1u64 << 40) - 1);
        assert_eq!(Uint8::MAX, u64::MAX);
    }

    #[test]
    fn parse_rejects_short_buffer() {
        let mut u = Uint4::default();
        assert!(u.parse(&[0u8; 3]).is_err());
    }

    #[test]
    fn serialized_big_endian() {
        let u = Uint5::from(0x0102030405);
        assert_eq!(u.serialize(), vec![1u8, 2, 3, 4, 5]);
    }
}


mod combi_tests {
    use super::*;

    #[test]
    fn diamond_list() {
        let d1 = DiamondName::from(*b"WTYUIA");
        let d2 = DiamondName::from(*b"HXVMEK");
        let list = DiamondNameListMax200::from_list(vec![d1, d2]).unwrap();
        assert_eq!(list.check().unwrap(), 2);
        let buf = list.serialize();
        assert_eq!(buf.len(), 1 + 2*6);
        assert_eq!(buf.len(), list.size());
        let (back, sk) = DiamondNameListMax200::create(&buf).unwrap();
        assert_eq!(sk, buf.len());
        assert_eq!(list, back);
        assert!(back.contains(b"WTYUIA"));
    }

    #[test]
    fn diamond_list_rejects_bad_name() {
        let bad = DiamondName::from(*b"ABCDEF"); // C D F not in alphabet
        let list = DiamondNameListMax200::one(bad);
        assert!(list.check().is_err());
    }

    #[test]
    fn diamond_list_rejects_duplicates() {
        let d1 = DiamondName::from(*b"WTYUIA");
        let list = DiamondNameListMax200::from_list(vec![d1, d1]).unwrap();
        assert!(list.check().is_err());
    }

    #[test]
    fn lending_id_format() {
        let mut id = LendingId::default();
        assert!(id.check_format().is_err());
        id[0] = 1;
        id[13] = 9;
        assert!(id.check_format().is_ok());
    }

    #[test]
    fn lending_sto_roundtrip() {
        let sto = DiamondLendingSto {
            is_ransomed: Bool::new(false),
            create_height: BlockHeight::from(100),
            main_address: Address::default(),
            mortgage_diamonds: DiamondNameListMax200::one(DiamondName::from(*b"WTYUIA")),
            loan_total_mei: Uint4::from(300),
            borrow_period: Uint1::from(1),
        };
        let buf = sto.serialize();
        assert_eq!(buf.len(), sto.size());
        let back = DiamondLendingSto::build(&buf).unwrap();
        assert_eq!(sto, back);
    }

    #[test]
    fn address_readable_roundtrip() {
        let acc = Account::create_by("123456").unwrap();
        let addr = Address::from(*acc.address());
        let show = addr.to_readable();
        let back = Address::from_readable(&show).unwrap();
        assert_eq!(addr, back);
        assert!(addr.is_privakey());
    }
}
