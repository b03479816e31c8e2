
pub type DiamondName = Fixed6;

impl DiamondName {

    pub fn name(&self) -> String {
        String::from_utf8(self.to_vec()).unwrap()
    }

    pub fn is_valid(stuff: &[u8]) -> bool {
        const DIAMOND_NAME_VALID_CHARS: [u8; 16] = *b"WTYUIAHXVMEKBSZN";
        if DiamondName::SIZE != stuff.len() {
            return false // length not match
        }
        stuff.iter().all(|&x|
            DIAMOND_NAME_VALID_CHARS.iter().any(|&a|a==x)
        )
    }

}


macro_rules! define_diamond_name_list { ( $class: ident, $nty: ty, $max: expr ) => {

combi_list!{ $class,
    $nty, DiamondName
}

impl $class {

    pub fn one(dia: DiamondName) -> Self {
        let mut obj = Self::default();
        obj.push(dia).unwrap();
        obj
    }

    pub fn check(&self) -> Ret<usize> {
        let setlen = *self.count as usize;
        let reallen = self.lists.len();
        if setlen != reallen {
            return errf!("check fail: length need {} but got {}", setlen, reallen)
        }
        if reallen == 0 {
            return errf!("diamonds quantity cannot be zero")
        }
        if reallen > $max {
            return errf!("diamonds quantity cannot over {}", $max)
        }
        for v in &self.lists {
            if ! DiamondName::is_valid(v.as_ref()) {
                return errf!("diamond name {} is not valid", v.to_readable())
            }
        }
        // check repeat
        if self.hashset().len() != reallen {
            return errf!("diamond name list contains duplicates")
        }
        Ok(reallen)
    }

    pub fn contains(&self, x: &[u8]) -> bool {
        self.lists.iter().any(|v|v.as_ref()==x)
    }

    pub fn splitstr(&self) -> String {
        self.lists.iter().map(|a|a.to_readable()).collect::<Vec<_>>().join(",")
    }

    pub fn hashset(&self) -> HashSet<DiamondName> {
        self.lists.iter().map(|a|a.clone()).collect::<HashSet<_>>()
    }

    pub fn from_readable(stuff: &str) -> Ret<$class> {
        let s = stuff.replace(" ","").replace("\n","").replace("|","").replace(",","");
        if s.len() == 0 {
            return errf!("diamond list empty")
        }
        if s.len() % 6 != 0 {
            return errf!("diamond list format error")
        }
        let num = s.len() / 6;
        if num > $max  {
            return errf!("diamond list max {} overflow", $max)
        }
        let mut obj = $class::default();
        let bs = s.as_bytes();
        for i in 0 .. num {
            let x = i*6;
            let name = DiamondName::from( bufcut!(bs, x, x+6) );
            obj.push(name).unwrap();
        }
        obj.check()?;
        Ok(obj)
    }

}

}}


define_diamond_name_list!{ DiamondNameListMax200, Uint1, 200 }
define_diamond_name_list!{ DiamondNameListMax255, Uint1, 255 }
